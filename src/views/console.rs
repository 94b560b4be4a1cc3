//! Colourised terminal view.

use super::DrawNumberView;
use crate::DrawResult;
use colored::Colorize;
use std::io::{self, Stdout, Write};
use tracing::warn;

const PROMPT: &str = "Enter a number (r = reset, h = history, q = quit):";

/// Interactive console surface. Prompts for the next guess whenever the game
/// expects one.
pub struct ConsoleView<W: Write = Stdout> {
    out: W,
}

impl ConsoleView<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleView<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, text: impl std::fmt::Display) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|()| self.out.flush()) {
            warn!(error = %e, "console view failed to write");
        }
    }

    fn prompt(&mut self) {
        self.print(PROMPT.dimmed());
    }
}

impl<W: Write> DrawNumberView for ConsoleView<W> {
    fn start(&mut self) {
        self.print("Guess the number!".bold());
        self.prompt();
    }

    fn result(&mut self, result: DrawResult) {
        let text = result.to_string();
        match result {
            DrawResult::YouWon => self.print(text.green().bold()),
            DrawResult::YouLost => self.print(text.red().bold()),
            DrawResult::CorrectNumberIsBigger | DrawResult::CorrectNumberIsSmaller => {
                self.print(text.yellow());
                self.prompt();
            }
        }
        if result.is_terminal() {
            self.print("Press r to play again or q to quit.".dimmed());
        }
    }

    fn number_incorrect(&mut self) {
        self.print("Incorrect number, try again".magenta());
        self.prompt();
    }

    fn display_error(&mut self, message: &str) {
        self.print(message.red());
    }

    fn reset_done(&mut self) {
        self.print("New game!".bold());
        self.prompt();
    }

    fn notice(&mut self, message: &str) {
        self.print(message.cyan());
    }
}
