//! # Draw Number
//!
//! Entry point of the guess-the-number game. Reads the configuration,
//! attaches the console view (plus optional plain-text transcripts) and plays
//! until the player quits or standard input closes.
//!
//! ## Usage
//! ```text
//! play --config config.yml --attempts 5 --seed 1234
//! ```
//!
//! Set `RUST_LOG=debug` to trace every attempt on stderr.

use clap::Parser;
use draw_number::{
    run_session, ConfigOptions, ConfigSource, ConsoleView, DrawNumberController, DrawNumberView,
    PrintStreamView,
};
use std::io;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Configuration file with `minimum`, `maximum` and `attempts` keys
    #[clap(short, long, default_value = "config.yml")]
    config: PathBuf,

    /// Overrides the configured lower bound
    #[clap(long, allow_hyphen_values = true)]
    minimum: Option<i32>,

    /// Overrides the configured upper bound
    #[clap(long, allow_hyphen_values = true)]
    maximum: Option<i32>,

    /// Overrides the configured number of attempts
    #[clap(short, long)]
    attempts: Option<u32>,

    /// Seed for a reproducible sequence of targets
    #[clap(short, long)]
    seed: Option<u64>,

    /// Transcript file written by a plain-text view
    #[clap(long, default_value = "output.log")]
    log_file: PathBuf,

    /// Do not write a transcript file
    #[clap(long, action = clap::ArgAction::SetTrue)]
    no_log_file: bool,

    /// Also echo every event to stdout as plain text
    #[clap(long, action = clap::ArgAction::SetTrue)]
    echo: bool,
}

impl Args {
    fn overrides(&self) -> ConfigOptions {
        ConfigOptions {
            minimum: self.minimum,
            maximum: self.maximum,
            attempts: self.attempts,
        }
    }

    fn views(&self) -> Vec<Box<dyn DrawNumberView>> {
        let mut views: Vec<Box<dyn DrawNumberView>> = vec![Box::new(ConsoleView::new())];
        if self.echo {
            views.push(Box::new(PrintStreamView::stdout()));
        }
        if !self.no_log_file {
            match PrintStreamView::create(&self.log_file) {
                Ok(view) => views.push(Box::new(view)),
                Err(e) => warn!(path = %self.log_file.display(), error = %e, "transcript disabled"),
            }
        }
        views
    }
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }

    let args = Args::parse();
    let source = ConfigSource::file(args.config.clone()).with_overrides(args.overrides());
    let views = args.views();
    let mut controller = match args.seed {
        Some(seed) => DrawNumberController::with_seed(&source, views, seed),
        None => DrawNumberController::new(&source, views),
    };

    run_session(&mut controller, io::stdin().lock())?;
    Ok(())
}
