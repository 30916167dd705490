//! Constructors shared by the loader, locator and reference decoder.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use super::ParentError;

/// Construct a [`ParentError::Load`] for a configuration path.
pub(crate) fn file_error(
    path: &Path,
    err: impl Into<Box<dyn Error + Send + Sync>>,
) -> Arc<ParentError> {
    Arc::new(ParentError::Load {
        path: path.to_path_buf(),
        source: err.into(),
    })
}

/// Construct a [`ParentError::Load`] describing malformed document contents.
pub(crate) fn invalid_data(path: &Path, msg: impl Into<String>) -> Arc<ParentError> {
    file_error(
        path,
        std::io::Error::new(std::io::ErrorKind::InvalidData, msg.into()),
    )
}

impl ParentError {
    /// Construct an [`ParentError::InvalidReference`] for `field`.
    ///
    /// `field` is the option name (for example `maxLevels`); pass an empty
    /// string when the whole `custom.parent` block is at fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use serverless_parent::ParentError;
    /// let err = ParentError::invalid_reference("maxLevels", "must be positive");
    /// assert!(err.to_string().contains("custom.parent.maxLevels"));
    /// ```
    #[must_use]
    pub fn invalid_reference(field: &str, message: impl Into<String>) -> Arc<Self> {
        let suffix = if field.is_empty() {
            String::new()
        } else {
            format!(".{field}")
        };
        Arc::new(Self::InvalidReference {
            field: suffix,
            message: message.into(),
        })
    }

    /// Returns `true` when the error came from auto-discovery.
    #[must_use]
    pub const fn is_discovery(&self) -> bool {
        matches!(self, Self::Discovery { .. })
    }

    /// Returns `true` when the error came from the document loader.
    #[must_use]
    pub const fn is_load(&self) -> bool {
        matches!(self, Self::Load { .. })
    }
}
