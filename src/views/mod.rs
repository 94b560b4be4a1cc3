//! # Views
//!
//! Presentation surfaces the controller broadcasts to. A view only displays;
//! user input reaches the controller as [`crate::Command`] values read by the
//! session loop, so views never hold a reference back to the controller.

pub mod console;
pub mod print_stream;

pub use console::ConsoleView;
pub use print_stream::PrintStreamView;

use crate::DrawResult;

/// Everything a presentation surface must be able to show.
pub trait DrawNumberView {
    /// Called once when the view is attached to a controller.
    fn start(&mut self);

    /// Shows the outcome of an attempt.
    fn result(&mut self, result: DrawResult);

    /// Tells the player the last input was not an acceptable number.
    fn number_incorrect(&mut self);

    /// Shows an error, such as a configuration problem.
    fn display_error(&mut self, message: &str);

    /// A new game has begun.
    fn reset_done(&mut self) {}

    /// Free-form information such as the attempt history or the revealed target.
    fn notice(&mut self, _message: &str) {}
}
