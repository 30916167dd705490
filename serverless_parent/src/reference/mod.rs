//! Decoding of the `custom.parent` block from a service document.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use std::path::PathBuf;

use crate::{Document, ParentError, ParentResult};

/// Upward search bound applied when `maxLevels` is not configured.
pub const DEFAULT_MAX_LEVELS: usize = 3;

/// How a service refers to the parent configuration it inherits from.
///
/// Decoded once from the pristine service document, before any merge can
/// overwrite the fields that steer it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentReference {
    /// Explicit parent location (a file, or a directory holding
    /// `serverless.yml`). Disables auto-discovery when set.
    pub path: Option<PathBuf>,
    /// Maximum number of directory levels auto-discovery may ascend.
    pub max_levels: usize,
    /// Whether parent values win over the service's own on conflicts.
    pub overwrite_service_config: bool,
}

impl Default for ParentReference {
    fn default() -> Self {
        Self {
            path: None,
            max_levels: DEFAULT_MAX_LEVELS,
            overwrite_service_config: true,
        }
    }
}

impl ParentReference {
    /// Read the parent reference from `document`'s `custom.parent` block.
    ///
    /// A missing `custom` section, a `custom` value that is not a mapping, or a
    /// missing or `null` `parent` entry all yield the defaults. Fields set to
    /// `null` are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ParentError::InvalidReference`] when `custom.parent` is not a
    /// mapping, `path` is not a non-empty string, `maxLevels` is not a positive
    /// integer, or `overwriteServiceConfig` is not a boolean.
    ///
    /// # Examples
    ///
    /// ```
    /// use serverless_parent::{ParentReference, parse_document};
    /// use std::path::Path;
    ///
    /// let doc = parse_document(
    ///     Path::new("serverless.yml"),
    ///     "custom:\n  parent:\n    maxLevels: 5\n    overwriteServiceConfig: false\n",
    /// )?;
    /// let reference = ParentReference::from_document(&doc)?;
    /// assert_eq!(reference.max_levels, 5);
    /// assert!(!reference.overwrite_service_config);
    /// assert!(reference.path.is_none());
    /// # Ok::<_, std::sync::Arc<serverless_parent::ParentError>>(())
    /// ```
    pub fn from_document(document: &Document) -> ParentResult<Self> {
        let Some(block) = document
            .get("custom")
            .and_then(Value::as_object)
            .and_then(|custom| custom.get("parent"))
        else {
            return Ok(Self::default());
        };
        match block {
            Value::Null => Ok(Self::default()),
            Value::Object(fields) => Self::from_fields(fields),
            _ => Err(ParentError::invalid_reference("", "expected a mapping")),
        }
    }

    fn from_fields(fields: &Map<String, Value>) -> ParentResult<Self> {
        let mut reference = Self::default();

        if let Some(path) = field::<String>(fields, "path")? {
            if path.is_empty() {
                return Err(ParentError::invalid_reference(
                    "path",
                    "must be a non-empty string",
                ));
            }
            reference.path = Some(PathBuf::from(path));
        }

        if let Some(levels) = field::<u64>(fields, "maxLevels")? {
            if levels == 0 {
                return Err(ParentError::invalid_reference(
                    "maxLevels",
                    "must be a positive integer",
                ));
            }
            reference.max_levels = usize::try_from(levels).unwrap_or(usize::MAX);
        }

        if let Some(overwrite) = field::<bool>(fields, "overwriteServiceConfig")? {
            reference.overwrite_service_config = overwrite;
        }

        Ok(reference)
    }

    /// Returns `true` when an explicit parent location was configured.
    #[must_use]
    pub const fn is_explicit(&self) -> bool {
        self.path.is_some()
    }
}

fn field<T: DeserializeOwned>(fields: &Map<String, Value>, name: &str) -> ParentResult<Option<T>> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|err| ParentError::invalid_reference(name, err.to_string())),
    }
}
