//! Parent configuration discovery.
//!
//! [`ParentLocator`] turns a [`ParentReference`] into the path of the parent
//! document. An explicit `path` is used as given (relative to the service
//! directory); otherwise the locator walks up from the service directory,
//! probing each ancestor for `serverless.yml` until it finds one, reaches the
//! user's home directory, or exhausts its level bound.

mod path;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::{CONFIG_FILE_NAME, ParentError, ParentReference, ParentResult};

use path::{canonicalise, default_home_dir, names_config_file};

/// Hard ceiling on upward traversal, whatever `maxLevels` says.
pub const MAX_LEVELS_CEILING: usize = 10;

/// Locates the parent configuration for a service directory.
///
/// # Examples
///
/// ```rust,no_run
/// use serverless_parent::{ParentLocator, ParentReference};
///
/// let locator = ParentLocator::new("services/orders");
/// let parent = locator.locate(&ParentReference::default())?;
/// println!("inheriting from {}", parent.display());
/// # Ok::<_, std::sync::Arc<serverless_parent::ParentError>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ParentLocator {
    service_dir: PathBuf,
    home_dir: Option<PathBuf>,
}

impl ParentLocator {
    /// Create a locator for `service_dir`, bounded by the user's home
    /// directory.
    #[must_use]
    pub fn new(service_dir: impl Into<PathBuf>) -> Self {
        Self {
            service_dir: service_dir.into(),
            home_dir: default_home_dir(),
        }
    }

    /// Replace the home directory that stops auto-discovery.
    #[must_use]
    pub fn with_home_dir(mut self, home_dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home_dir.into());
        self
    }

    /// Service directory the locator resolves from.
    #[must_use]
    pub fn service_dir(&self) -> &Path {
        &self.service_dir
    }

    /// Home directory bounding auto-discovery, if one is known.
    #[must_use]
    pub fn home_dir(&self) -> Option<&Path> {
        self.home_dir.as_deref()
    }

    /// Resolve the parent document path for `reference`.
    ///
    /// An explicit `path` short-circuits discovery entirely and is returned
    /// without checking that it exists; the loader reports a missing file.
    ///
    /// # Errors
    ///
    /// Returns [`ParentError::Discovery`] when auto-discovery finds nothing
    /// within its bound, or [`ParentError::ServiceDir`] when the service
    /// directory cannot be canonicalised.
    pub fn locate(&self, reference: &ParentReference) -> ParentResult<PathBuf> {
        if let Some(explicit) = &reference.path {
            let resolved = self.explicit_path(explicit);
            debug!(path = %resolved.display(), "using explicit parent configuration path");
            return Ok(resolved);
        }
        self.discover(reference.max_levels)
    }

    /// Turn an explicit `custom.parent.path` value into a document path.
    ///
    /// Relative paths are joined onto the service directory. Paths that do
    /// not end in a `.yml`/`.yaml` file name are treated as directories and
    /// joined with `serverless.yml`.
    #[must_use]
    pub fn explicit_path(&self, path: &Path) -> PathBuf {
        let base = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.service_dir.join(path)
        };
        if names_config_file(&base) {
            base
        } else {
            base.join(CONFIG_FILE_NAME)
        }
    }

    /// Walk up from the service directory looking for `serverless.yml`.
    ///
    /// # Errors
    ///
    /// Returns [`ParentError::Discovery`] when no candidate directory holds
    /// the file, or [`ParentError::ServiceDir`] when the service directory
    /// cannot be canonicalised.
    pub fn discover(&self, max_levels: usize) -> ParentResult<PathBuf> {
        let bound = effective_bound(max_levels);
        for candidate in self.probe_dirs(bound)? {
            let file = candidate.join(CONFIG_FILE_NAME);
            debug!(candidate = %candidate.display(), "probing for parent configuration");
            if file.is_file() {
                debug!(path = %file.display(), "discovered parent configuration");
                return Ok(file);
            }
        }
        Err(Arc::new(ParentError::Discovery {
            start: self.service_dir.clone(),
            max_levels: bound,
            file_name: CONFIG_FILE_NAME,
        }))
    }

    /// Directories auto-discovery probes, nearest first.
    ///
    /// The list starts at the immediate parent of the canonical service
    /// directory and holds at most `max_levels` entries (capped at
    /// [`MAX_LEVELS_CEILING`]). It ends early at the home directory, which is
    /// itself still probed, or at the filesystem root.
    ///
    /// # Errors
    ///
    /// Returns [`ParentError::ServiceDir`] when the service directory cannot
    /// be canonicalised.
    pub fn candidates(&self, max_levels: usize) -> ParentResult<Vec<PathBuf>> {
        self.probe_dirs(effective_bound(max_levels))
    }

    fn probe_dirs(&self, bound: usize) -> ParentResult<Vec<PathBuf>> {
        let start = canonicalise(&self.service_dir).map_err(|source| {
            Arc::new(ParentError::ServiceDir {
                path: self.service_dir.clone(),
                source,
            })
        })?;
        let home = self
            .home_dir
            .as_deref()
            .map(|home| canonicalise(home).unwrap_or_else(|_| home.to_path_buf()));

        let mut dirs = Vec::new();
        for candidate in start.ancestors().skip(1).take(bound) {
            dirs.push(candidate.to_path_buf());
            if home.as_deref() == Some(candidate) {
                debug!(home = %candidate.display(), "stopping parent discovery at home directory");
                break;
            }
        }
        Ok(dirs)
    }
}

fn effective_bound(max_levels: usize) -> usize {
    if max_levels > MAX_LEVELS_CEILING {
        warn!(
            requested = max_levels,
            ceiling = MAX_LEVELS_CEILING,
            "maxLevels exceeds the traversal ceiling; clamping"
        );
        MAX_LEVELS_CEILING
    } else {
        max_levels
    }
}
