//! Plain-text view over any [`Write`] sink: standard output or a transcript
//! file.

use super::DrawNumberView;
use crate::DrawResult;
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;
use tracing::warn;

/// Writes one line per event to the wrapped sink.
///
/// Write failures are logged and otherwise ignored so a broken transcript
/// never stops the game.
#[derive(Debug)]
pub struct PrintStreamView<W: Write> {
    out: W,
}

impl PrintStreamView<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl PrintStreamView<BufWriter<File>> {
    /// Creates (or truncates) `path` and writes the transcript there.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> PrintStreamView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|()| self.out.flush()) {
            warn!(error = %e, "print stream view failed to write");
        }
    }
}

impl<W: Write> DrawNumberView for PrintStreamView<W> {
    fn start(&mut self) {
        self.line("Draw number started");
    }

    fn result(&mut self, result: DrawResult) {
        self.line(&format!("Result: {}", result));
    }

    fn number_incorrect(&mut self) {
        self.line("Incorrect number, try again");
    }

    fn display_error(&mut self, message: &str) {
        self.line(&format!("Error: {}", message));
    }

    fn reset_done(&mut self) {
        self.line("New game");
    }

    fn notice(&mut self, message: &str) {
        self.line(message);
    }
}
