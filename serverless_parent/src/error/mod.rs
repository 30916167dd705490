//! Error types produced while locating, loading and merging parent
//! configuration.

mod constructors;
mod types;

pub use types::ParentError;

/// Result alias used throughout the crate.
///
/// Errors are shared behind an [`std::sync::Arc`] so callers can keep a
/// failure around (for reporting) while still propagating it.
pub type ParentResult<T> = Result<T, std::sync::Arc<ParentError>>;

pub(crate) use constructors::{file_error, invalid_data};
