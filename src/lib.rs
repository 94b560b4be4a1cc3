//! # Draw Number
//!
//! A guess-the-number game split into a model, a controller and any number
//! of views. The controller owns the model, forwards every attempt to it and
//! broadcasts the outcome to all views.
//!
//! ```text
//!  input ──► Command ──► DrawNumberController ──► DrawNumberModel
//!                               │
//!                 ┌─────────────┼──────────────┐
//!                 ▼             ▼              ▼
//!            ConsoleView  PrintStreamView  PrintStreamView
//!                          (stdout)        (output.log)
//! ```

pub mod config;
pub mod error;
pub mod game_controller;
pub mod games;
pub mod session;
pub mod views;

pub use config::{ConfigOptions, Configuration};
pub use error::{ConfigError, DrawError};
pub use game_controller::{AttemptEntry, ConfigSource, DrawNumberController, DrawNumberObserver};
pub use games::draw_number::{DrawNumberModel, DrawResult, GameStatus};
pub use session::{run_session, Command};
pub use views::{ConsoleView, DrawNumberView, PrintStreamView};

/// The boundary between the controller and the game model.
pub trait DrawNumber {
    /// Evaluates one guess.
    ///
    /// Fails with [`DrawError::OutOfRange`] when the guess lies outside the
    /// configured bounds and with [`DrawError::GameOver`] once the game has
    /// been won or lost. A failed attempt never changes the model.
    fn attempt(&mut self, guess: i32) -> error::Result<DrawResult>;

    /// Draws a new target and restores the attempt budget.
    fn reset(&mut self);
}
