//! Command-line interface definitions for `serverless-parent`.

use camino::Utf8PathBuf;
use clap::Parser;

/// Parsed CLI arguments for `serverless-parent`.
#[derive(Debug, Parser)]
#[command(name = "serverless-parent")]
#[command(about = "Merge a service's serverless.yml with its parent and print the result")]
#[command(version)]
pub struct Args {
    /// Directory holding the service's `serverless.yml` (defaults to the
    /// current directory).
    #[arg(long, value_name = "path")]
    pub service_dir: Option<Utf8PathBuf>,
    /// Directory at which upward parent discovery stops (defaults to the
    /// user's home directory).
    #[arg(long, value_name = "path")]
    pub home_dir: Option<Utf8PathBuf>,
    /// Write the effective configuration to this file instead of stdout.
    #[arg(long, value_name = "path")]
    pub out: Option<Utf8PathBuf>,
    /// Increase log verbosity (repeat for more detail).
    #[arg(short, long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Args {
    /// Service directory to resolve from.
    #[must_use]
    pub fn service_dir(&self) -> Utf8PathBuf {
        self.service_dir
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from("."))
    }
}
