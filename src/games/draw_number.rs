//! # Draw Number Game Implementation
//!
//! A hidden target is drawn uniformly from `[minimum, maximum]` and the player
//! has a fixed number of attempts to find it. Each attempt answers whether the
//! target is bigger or smaller than the guess.
//!
//! ## Rules
//! - Guesses outside the bounds are rejected without costing an attempt
//! - Every valid guess costs one attempt
//! - A correct guess wins, even when it is the last attempt
//! - Running out of attempts without a correct guess loses
//! - Once the game is over, only a reset starts a new one

use crate::config::Configuration;
use crate::error::{DrawError, Result};
use crate::DrawNumber;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fmt;
use tracing::{debug, info, warn};

/// Outcome of one evaluated attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawResult {
    /// The guess was the target
    YouWon,
    /// The guess was wrong and no attempts are left
    YouLost,
    /// The target is bigger than the guess
    CorrectNumberIsBigger,
    /// The target is smaller than the guess
    CorrectNumberIsSmaller,
}

impl DrawResult {
    /// True if this result ends the game
    pub fn is_terminal(&self) -> bool {
        matches!(self, DrawResult::YouWon | DrawResult::YouLost)
    }
}

impl fmt::Display for DrawResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawResult::YouWon => write!(f, "You won!"),
            DrawResult::YouLost => write!(f, "You lost..."),
            DrawResult::CorrectNumberIsBigger => write!(f, "Go higher!"),
            DrawResult::CorrectNumberIsSmaller => write!(f, "Go lower!"),
        }
    }
}

/// Current game status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Attempts remain and the target has not been found
    InProgress,
    /// The target was guessed
    Won,
    /// Attempts ran out
    Lost,
}

impl GameStatus {
    /// Check if the game is over
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// The draw model: configuration, hidden target and attempt counter.
///
/// Generic over the random source so tests and `--seed` runs are
/// reproducible. The default generator is xoshiro256++.
#[derive(Debug, Clone)]
pub struct DrawNumberModel<R: Rng = Xoshiro256PlusPlus> {
    configuration: Configuration,
    rng: R,
    target: i32,
    remaining_attempts: u32,
    status: GameStatus,
}

impl DrawNumberModel<Xoshiro256PlusPlus> {
    /// Creates a model whose generator is seeded from the thread RNG.
    pub fn new(configuration: Configuration) -> Self {
        Self::with_rng(configuration, Xoshiro256PlusPlus::from_rng(&mut rand::rng()))
    }

    /// Creates a model with a deterministic sequence of targets.
    pub fn with_seed(configuration: Configuration, seed: u64) -> Self {
        Self::with_rng(configuration, Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl<R: Rng> DrawNumberModel<R> {
    /// Creates a model drawing its targets from `rng`.
    ///
    /// # Arguments
    /// * `configuration` - Bounds and attempt budget. An inconsistent one is
    ///   replaced by [`Configuration::default`].
    /// * `rng` - Source of every target this model draws
    pub fn with_rng(configuration: Configuration, mut rng: R) -> Self {
        let configuration = if configuration.is_consistent() {
            configuration
        } else {
            warn!(?configuration, "inconsistent configuration, using defaults");
            Configuration::default()
        };
        let target = draw_target(&configuration, &mut rng);
        Self {
            configuration,
            rng,
            target,
            remaining_attempts: configuration.attempts(),
            status: GameStatus::InProgress,
        }
    }

    /// The configuration this model plays with
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Attempts left in the current game
    pub fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    /// Whether the current game is running, won or lost
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the current game is won or lost
    pub fn is_finished(&self) -> bool {
        self.status.is_game_over()
    }

    /// The target, revealed only once the game is over.
    ///
    /// # Returns
    /// `None` while the game is in progress.
    pub fn revealed_target(&self) -> Option<i32> {
        self.is_finished().then_some(self.target)
    }
}

impl<R: Rng> DrawNumber for DrawNumberModel<R> {
    fn attempt(&mut self, guess: i32) -> Result<DrawResult> {
        if !self.configuration.contains(guess) {
            return Err(DrawError::OutOfRange {
                guess,
                minimum: self.configuration.minimum(),
                maximum: self.configuration.maximum(),
            });
        }
        if self.status.is_game_over() {
            return Err(DrawError::GameOver);
        }

        self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
        let result = if guess == self.target {
            self.status = GameStatus::Won;
            DrawResult::YouWon
        } else if self.remaining_attempts == 0 {
            self.status = GameStatus::Lost;
            DrawResult::YouLost
        } else if guess < self.target {
            DrawResult::CorrectNumberIsBigger
        } else {
            DrawResult::CorrectNumberIsSmaller
        };

        debug!(guess, remaining = self.remaining_attempts, %result, "attempt evaluated");
        Ok(result)
    }

    fn reset(&mut self) {
        self.target = draw_target(&self.configuration, &mut self.rng);
        self.remaining_attempts = self.configuration.attempts();
        self.status = GameStatus::InProgress;
        info!(attempts = self.remaining_attempts, "new game started");
    }
}

fn draw_target<R: Rng>(configuration: &Configuration, rng: &mut R) -> i32 {
    rng.random_range(configuration.minimum()..=configuration.maximum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigOptions;

    fn model_with_target(min: i32, max: i32, attempts: u32, target: i32) -> DrawNumberModel {
        let config = ConfigOptions::new()
            .with_minimum(min)
            .with_maximum(max)
            .with_attempts(attempts)
            .build();
        let mut model = DrawNumberModel::with_seed(config, 1);
        model.target = target;
        model
    }

    #[test]
    fn test_new_game() {
        let model = DrawNumberModel::with_seed(Configuration::default(), 42);
        assert_eq!(model.remaining_attempts(), 10);
        assert_eq!(model.status(), GameStatus::InProgress);
        assert!(model.configuration().contains(model.target));
        assert_eq!(model.revealed_target(), None);
    }

    #[test]
    fn test_hints_then_win() {
        let mut model = model_with_target(0, 10, 3, 7);
        assert_eq!(model.attempt(3), Ok(DrawResult::CorrectNumberIsBigger));
        assert_eq!(model.attempt(9), Ok(DrawResult::CorrectNumberIsSmaller));
        assert_eq!(model.attempt(7), Ok(DrawResult::YouWon));
        assert_eq!(model.status(), GameStatus::Won);
        assert_eq!(model.revealed_target(), Some(7));
    }

    #[test]
    fn test_exhausted_attempts_lose() {
        let mut model = model_with_target(0, 10, 3, 7);
        assert_eq!(model.attempt(1), Ok(DrawResult::CorrectNumberIsBigger));
        assert_eq!(model.attempt(2), Ok(DrawResult::CorrectNumberIsBigger));
        assert_eq!(model.attempt(3), Ok(DrawResult::YouLost));
        assert_eq!(model.remaining_attempts(), 0);
        assert_eq!(model.status(), GameStatus::Lost);
    }

    #[test]
    fn test_win_on_last_attempt() {
        let mut model = model_with_target(0, 10, 2, 7);
        model.attempt(1).unwrap();
        assert_eq!(model.attempt(7), Ok(DrawResult::YouWon));
        assert_eq!(model.remaining_attempts(), 0);
    }

    #[test]
    fn test_out_of_range_keeps_state() {
        let mut model = model_with_target(0, 10, 3, 7);
        assert_eq!(
            model.attempt(11),
            Err(DrawError::OutOfRange {
                guess: 11,
                minimum: 0,
                maximum: 10
            })
        );
        assert!(matches!(model.attempt(-1), Err(DrawError::OutOfRange { .. })));
        assert_eq!(model.remaining_attempts(), 3);
        assert_eq!(model.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_attempt_after_game_over_rejected() {
        let mut model = model_with_target(0, 10, 3, 7);
        model.attempt(7).unwrap();
        assert_eq!(model.attempt(7), Err(DrawError::GameOver));
        assert_eq!(model.remaining_attempts(), 2);
    }

    #[test]
    fn test_reset() {
        let mut model = model_with_target(0, 10, 3, 7);
        model.attempt(1).unwrap();
        model.attempt(2).unwrap();
        model.attempt(3).unwrap();
        assert!(model.is_finished());

        model.reset();
        assert_eq!(model.remaining_attempts(), 3);
        assert_eq!(model.status(), GameStatus::InProgress);
        assert!(model.configuration().contains(model.target));
    }

    #[test]
    fn test_inconsistent_configuration_falls_back() {
        let config = ConfigOptions::new()
            .with_minimum(5)
            .with_maximum(1)
            .build();
        let model = DrawNumberModel::with_seed(config, 1);
        assert_eq!(*model.configuration(), Configuration::default());
        assert!(model.configuration().contains(model.target));

        let no_attempts = ConfigOptions::new().with_attempts(0).build();
        let model = DrawNumberModel::with_seed(no_attempts, 1);
        assert_eq!(model.remaining_attempts(), 10);
    }

    #[test]
    fn test_same_seed_same_target() {
        let a = DrawNumberModel::with_seed(Configuration::default(), 99);
        let b = DrawNumberModel::with_seed(Configuration::default(), 99);
        assert_eq!(a.target, b.target);
    }

    #[test]
    fn test_result_display() {
        assert_eq!(DrawResult::YouWon.to_string(), "You won!");
        assert_eq!(DrawResult::CorrectNumberIsBigger.to_string(), "Go higher!");
        assert!(DrawResult::YouLost.is_terminal());
        assert!(!DrawResult::CorrectNumberIsSmaller.is_terminal());
    }
}
