//! # Game Configuration
//!
//! The bounds and attempt budget of a game, and the text format they are read
//! from. A configuration source is line oriented; every line holds one or more
//! `key:value` tokens separated by `;`:
//!
//! ```text
//! # bounds
//! minimum: 0; maximum: 100
//! attempts: 10
//! ```
//!
//! Recognised keys are `minimum`, `maximum` and `attempts`. Anything else is
//! ignored, so a plain YAML file with those three keys also parses.

use crate::error::ConfigError;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Default lower bound of the target
pub const DEFAULT_MINIMUM: i32 = 0;
/// Default upper bound of the target
pub const DEFAULT_MAXIMUM: i32 = 100;
/// Default number of attempts per game
pub const DEFAULT_ATTEMPTS: u32 = 10;

/// Immutable snapshot of the game bounds and attempt budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    minimum: i32,
    maximum: i32,
    attempts: u32,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            minimum: DEFAULT_MINIMUM,
            maximum: DEFAULT_MAXIMUM,
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}

impl Configuration {
    /// Lowest number the target can be
    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    /// Highest number the target can be
    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Number of attempts granted per game
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// True iff the bounds are ordered and at least one attempt is allowed.
    pub fn is_consistent(&self) -> bool {
        self.minimum < self.maximum && self.attempts > 0
    }

    /// Returns the configuration back if consistent, or an error naming the
    /// offending values.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.is_consistent() {
            Ok(self)
        } else {
            Err(ConfigError::Inconsistent {
                minimum: self.minimum,
                maximum: self.maximum,
                attempts: self.attempts,
            })
        }
    }

    /// Whether `n` lies inside `[minimum, maximum]`
    pub fn contains(&self, n: i32) -> bool {
        (self.minimum..=self.maximum).contains(&n)
    }
}

/// Optional configuration values, each falling back to its default when
/// [`ConfigOptions::build`] takes the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOptions {
    pub minimum: Option<i32>,
    pub maximum: Option<i32>,
    pub attempts: Option<u32>,
}

impl ConfigOptions {
    /// Options with nothing set; [`ConfigOptions::build`] yields the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lower bound.
    pub fn with_minimum(mut self, minimum: i32) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Sets the upper bound.
    pub fn with_maximum(mut self, maximum: i32) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Sets the number of attempts per game.
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = Some(attempts);
        self
    }

    /// Layers `other` on top of `self`: every value set in `other` wins.
    pub fn merge(self, other: ConfigOptions) -> Self {
        Self {
            minimum: other.minimum.or(self.minimum),
            maximum: other.maximum.or(self.maximum),
            attempts: other.attempts.or(self.attempts),
        }
    }

    /// Snapshot of the current values. Never fails; consistency is checked
    /// separately with [`Configuration::is_consistent`].
    pub fn build(&self) -> Configuration {
        Configuration {
            minimum: self.minimum.unwrap_or(DEFAULT_MINIMUM),
            maximum: self.maximum.unwrap_or(DEFAULT_MAXIMUM),
            attempts: self.attempts.unwrap_or(DEFAULT_ATTEMPTS),
        }
    }

    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options = text.parse()?;
        debug!(path = %path.display(), ?options, "configuration file parsed");
        Ok(options)
    }

    fn apply(&mut self, key: &str, value: &str, line: usize) -> Result<(), ConfigError> {
        let invalid = |source| ConfigError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
            line,
            source,
        };
        match key {
            "minimum" => self.minimum = Some(value.parse().map_err(invalid)?),
            "maximum" => self.maximum = Some(value.parse().map_err(invalid)?),
            "attempts" => self.attempts = Some(value.parse().map_err(invalid)?),
            _ => debug!(key, line, "ignoring unknown configuration key"),
        }
        Ok(())
    }
}

impl FromStr for ConfigOptions {
    type Err = ConfigError;

    /// Parses every line's `;`-separated `key:value` tokens.
    ///
    /// Tokens without a `:` and unknown keys are skipped. A known key with a
    /// value that is not an integer is an error. Later values override
    /// earlier ones. A leading byte order mark is skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options = ConfigOptions::new();
        let text = s.trim_start_matches('\u{feff}');
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            for token in line.split(';') {
                let Some((key, value)) = token.split_once(':') else {
                    continue;
                };
                options.apply(key.trim(), value.trim(), index + 1)?;
            }
        }
        Ok(options)
    }
}
