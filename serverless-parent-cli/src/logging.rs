//! Structured logging set-up for the command.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise `verbosity` picks the level
/// (`0` → warn, `1` → info, `2` → debug, more → trace).
///
/// # Errors
///
/// Returns [`CliError::Logging`] if a global subscriber is already installed.
pub fn init(verbosity: u8) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}

/// Map a `-v` count onto a filter directive.
#[must_use]
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
