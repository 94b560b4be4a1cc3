//! # Game Controller Module
//!
//! The `DrawNumberController` owns the authoritative game model and every
//! attached view. Input reaches it through the [`DrawNumberObserver`]
//! callbacks; each outcome is broadcast to all views.
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │              DrawNumberController              │
//! │  ┌──────────────────────────────────────────┐  │
//! │  │ DrawNumberModel (single source of truth) │  │
//! │  └──────────────────────────────────────────┘  │
//! │  attempt history        session running flag   │
//! └───────────────────────┬────────────────────────┘
//!            ┌────────────┼────────────┐
//!            ▼            ▼            ▼
//!        view #1      view #2      view #N
//! ```
//!
//! Configuration problems never stop the game: the controller falls back to
//! the default configuration and shows the error on every view.

use crate::config::{ConfigOptions, Configuration};
use crate::error::{ConfigError, DrawError};
use crate::games::draw_number::{DrawNumberModel, DrawResult};
use crate::session::Command;
use crate::views::DrawNumberView;
use crate::DrawNumber;
use std::path::PathBuf;
use std::time::SystemTime;
use tracing::{debug, info, warn};

/// Callbacks through which user input reaches the controller.
pub trait DrawNumberObserver {
    /// A new guess was submitted.
    fn new_attempt(&mut self, n: i32);

    /// The player asked for a new game.
    fn reset_game(&mut self);

    /// The player asked to end the session.
    fn quit(&mut self);
}

/// Where the controller takes its configuration from.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    /// File to parse, if any
    pub path: Option<PathBuf>,
    /// Values that override whatever the file says
    pub overrides: ConfigOptions,
}

impl ConfigSource {
    /// Reads the configuration from `path`, with no overrides.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            overrides: ConfigOptions::default(),
        }
    }

    /// Replaces the overrides layered on top of the file.
    ///
    /// # Arguments
    /// * `overrides` - Values that win over the file, typically from the command line
    pub fn with_overrides(mut self, overrides: ConfigOptions) -> Self {
        self.overrides = overrides;
        self
    }

    /// Reads the file, layers the overrides and validates the result.
    pub fn resolve(&self) -> Result<Configuration, ConfigError> {
        let from_file = match &self.path {
            Some(path) => ConfigOptions::load(path)?,
            None => ConfigOptions::default(),
        };
        from_file.merge(self.overrides).build().validate()
    }
}

/// A single entry in the attempt history
#[derive(Debug, Clone)]
pub struct AttemptEntry {
    /// When the attempt was made
    pub timestamp: SystemTime,
    /// Attempt number within the current game (1-indexed)
    pub attempt_number: usize,
    /// The submitted guess
    pub guess: i32,
    /// What the model answered
    pub result: DrawResult,
}

impl AttemptEntry {
    /// Create a new history entry stamped with the current time
    pub fn new(attempt_number: usize, guess: i32, result: DrawResult) -> Self {
        Self {
            timestamp: SystemTime::now(),
            attempt_number,
            guess,
            result,
        }
    }
}

/// The controller that owns the model and relays between it and the views.
///
/// # Usage
/// ```rust,ignore
/// let views: Vec<Box<dyn DrawNumberView>> = vec![Box::new(ConsoleView::new())];
/// let mut controller = DrawNumberController::new(&ConfigSource::file("config.yml"), views);
/// controller.new_attempt(50);
/// controller.reset_game();
/// ```
pub struct DrawNumberController {
    model: DrawNumberModel,
    views: Vec<Box<dyn DrawNumberView>>,
    history: Vec<AttemptEntry>,
    running: bool,
}

impl DrawNumberController {
    /// Starts every view, resolves the configuration and builds the model.
    pub fn new(source: &ConfigSource, views: Vec<Box<dyn DrawNumberView>>) -> Self {
        Self::build(source, views, DrawNumberModel::new)
    }

    /// Same as [`DrawNumberController::new`] with a reproducible target sequence.
    pub fn with_seed(
        source: &ConfigSource,
        views: Vec<Box<dyn DrawNumberView>>,
        seed: u64,
    ) -> Self {
        Self::build(source, views, |config| DrawNumberModel::with_seed(config, seed))
    }

    fn build(
        source: &ConfigSource,
        mut views: Vec<Box<dyn DrawNumberView>>,
        make_model: impl FnOnce(Configuration) -> DrawNumberModel,
    ) -> Self {
        for view in views.iter_mut() {
            view.start();
        }

        let configuration = match source.resolve() {
            Ok(configuration) => {
                info!(
                    minimum = configuration.minimum(),
                    maximum = configuration.maximum(),
                    attempts = configuration.attempts(),
                    "configuration loaded"
                );
                configuration
            }
            Err(e) => {
                warn!(error = %e, "falling back to default configuration");
                let message = e.to_string();
                for view in views.iter_mut() {
                    view.display_error(&message);
                }
                Configuration::default()
            }
        };

        Self {
            model: make_model(configuration),
            views,
            history: Vec::new(),
            running: true,
        }
    }

    /// Dispatches one parsed input command.
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Attempt(n) => self.new_attempt(n),
            Command::Reset => self.reset_game(),
            Command::Quit => self.quit(),
            Command::History => {
                let history = self.format_history();
                self.broadcast(|view| view.notice(&history));
            }
            Command::Invalid(input) => {
                debug!(input = %input, "unparsable input");
                self.broadcast(|view| view.number_incorrect());
            }
        }
    }

    /// False once the player has quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The configuration in effect, after any fallback to defaults
    pub fn configuration(&self) -> &Configuration {
        self.model.configuration()
    }

    /// Read-only view of the game model
    pub fn model(&self) -> &DrawNumberModel {
        &self.model
    }

    /// Attempts of the current game, oldest first
    pub fn history(&self) -> &[AttemptEntry] {
        &self.history
    }

    /// Renders the attempt history of the current game.
    pub fn format_history(&self) -> String {
        if self.history.is_empty() {
            return String::from("No attempts made yet.");
        }

        let mut output = String::from("=== Attempt History ===\n");
        for entry in &self.history {
            output.push_str(&format!(
                "{}. {} - {}\n",
                entry.attempt_number, entry.guess, entry.result
            ));
        }
        output.push_str(&format!("({} attempts left)", self.model.remaining_attempts()));
        output
    }

    fn display_error(&mut self, message: &str) {
        self.broadcast(|view| view.display_error(message));
    }

    fn broadcast(&mut self, mut f: impl FnMut(&mut dyn DrawNumberView)) {
        for view in self.views.iter_mut() {
            f(view.as_mut());
        }
    }
}

impl DrawNumberObserver for DrawNumberController {
    fn new_attempt(&mut self, n: i32) {
        match self.model.attempt(n) {
            Ok(result) => {
                self.history.push(AttemptEntry::new(self.history.len() + 1, n, result));
                self.broadcast(|view| view.result(result));
                if result == DrawResult::YouLost {
                    if let Some(target) = self.model.revealed_target() {
                        let message = format!("The number was {}", target);
                        self.broadcast(|view| view.notice(&message));
                    }
                }
            }
            Err(DrawError::OutOfRange { .. }) => {
                self.broadcast(|view| view.number_incorrect());
            }
            Err(e @ DrawError::GameOver) => {
                self.display_error(&e.to_string());
            }
        }
    }

    fn reset_game(&mut self) {
        self.model.reset();
        self.history.clear();
        self.broadcast(|view| view.reset_done());
    }

    fn quit(&mut self) {
        info!("session terminated by player");
        self.running = false;
    }
}
