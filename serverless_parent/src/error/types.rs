//! Primary error enum for parent configuration flows.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while inheriting a parent configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParentError {
    /// Auto-discovery exhausted its search bound without finding a parent.
    #[error(
        "could not discover parent configuration: no {file_name} found within {max_levels} \
         level(s) above '{start}'"
    )]
    Discovery {
        /// Service directory the search started from.
        start: PathBuf,
        /// Effective upward bound that was applied.
        max_levels: usize,
        /// Conventional file name that was searched for.
        file_name: &'static str,
    },

    /// The service directory could not be resolved on disk.
    #[error("cannot resolve service directory '{path}': {source}")]
    ServiceDir {
        /// Directory the search was asked to start from.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The located parent document could not be read or parsed.
    #[error("failed to load configuration '{path}': {source}")]
    Load {
        /// Path handed to the document loader.
        path: PathBuf,
        /// Underlying error reported by the loader.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The `custom.parent` block of the service configuration is malformed.
    #[error("invalid parent reference at 'custom.parent{field}': {message}")]
    InvalidReference {
        /// Offending field, as a `.name` suffix, or empty for the whole block.
        field: String,
        /// Human-readable explanation of the problem.
        message: String,
    },

    /// Serialising the effective configuration failed.
    #[error("failed to render effective configuration: {message}")]
    Render {
        /// Message reported by the serialiser.
        message: String,
    },
}
