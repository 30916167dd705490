//! Error types for `serverless-parent`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the `serverless-parent` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Locating, loading, merging or rendering the configuration failed.
    #[error(transparent)]
    Parent(#[from] Arc<serverless_parent::ParentError>),

    /// Writing the effective configuration failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Destination that could not be written.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The log subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
