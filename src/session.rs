//! # Session Loop
//!
//! Turns lines of user input into [`Command`]s and feeds them to the
//! controller until the player quits or the input ends.

use crate::game_controller::DrawNumberController;
use std::io::{self, BufRead};
use tracing::debug;

/// One line of user input, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Guess this number
    Attempt(i32),
    /// Start a new game
    Reset,
    /// End the session
    Quit,
    /// Show the attempts made so far
    History,
    /// Text that is neither a number nor a known keyword
    Invalid(String),
}

impl Command {
    /// Interprets one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let command = match line.to_ascii_lowercase().as_str() {
            "r" | "reset" => Command::Reset,
            "q" | "quit" | "exit" => Command::Quit,
            "h" | "history" => Command::History,
            _ => match line.parse::<i32>() {
                Ok(n) => Command::Attempt(n),
                Err(_) => Command::Invalid(line.to_string()),
            },
        };
        Some(command)
    }
}

/// Reads commands from `input` until the controller stops running or the
/// input is exhausted. Returns the number of commands handled.
///
/// Lines that are not valid UTF-8 are decoded lossily, so they reach the
/// controller as invalid input instead of ending the session.
pub fn run_session<R: BufRead>(
    controller: &mut DrawNumberController,
    mut input: R,
) -> io::Result<usize> {
    let mut handled = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let Some(command) = Command::parse(&line) else {
            continue;
        };
        debug!(?command, "handling command");
        controller.handle(command);
        handled += 1;
        if !controller.is_running() {
            break;
        }
    }
    Ok(handled)
}
