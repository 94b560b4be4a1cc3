use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or validating the game configuration.
///
/// None of these are fatal: the controller falls back to the default
/// configuration and shows the message to every attached view.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read configuration file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid number for '{key}' on line {line}: '{value}'")]
    InvalidNumber {
        key: String,
        value: String,
        line: usize,
        #[source]
        source: ParseIntError,
    },

    #[error(
        "Inconsistent configuration: min: {minimum}, max: {maximum}, attempts: {attempts}. Using defaults instead."
    )]
    Inconsistent {
        minimum: i32,
        maximum: i32,
        attempts: u32,
    },
}

/// Errors raised by a single attempt. The game state is never touched when
/// one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    #[error("{guess} is outside [{minimum}, {maximum}]")]
    OutOfRange {
        guess: i32,
        minimum: i32,
        maximum: i32,
    },

    #[error("The game is over, reset to play again")]
    GameOver,
}

/// Convenience Result type for attempts
pub type Result<T> = std::result::Result<T, DrawError>;
