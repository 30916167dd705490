//! Loader seam used to read parent documents from disk.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use tracing::debug;

use std::path::Path;

use super::yaml::parse_document;
use crate::error::{file_error, invalid_data};
use crate::{Document, ParentResult};

/// Reads and parses a configuration document from a filesystem path.
///
/// The merge flow only ever calls [`DocumentLoader::load`] once per
/// inheritance, after the parent path has been located. Failures are
/// propagated to the caller unchanged.
pub trait DocumentLoader {
    /// Load the document stored at `path`.
    ///
    /// # Errors
    ///
    /// Implementations return [`crate::ParentError::Load`] when the file is
    /// missing, unreadable, or not a valid document.
    fn load(&self, path: &Path) -> ParentResult<Document>;
}

/// [`DocumentLoader`] reading YAML files from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlLoader;

impl YamlLoader {
    /// Construct a YAML loader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentLoader for YamlLoader {
    fn load(&self, path: &Path) -> ParentResult<Document> {
        let utf8 = Utf8Path::from_path(path)
            .ok_or_else(|| invalid_data(path, "configuration path is not valid UTF-8"))?;
        let contents = read_file(utf8).map_err(|e| file_error(path, e))?;
        debug!(path = %utf8, bytes = contents.len(), "read configuration document");
        parse_document(path, &contents)
    }
}

/// Read `path` through a capability handle on its containing directory.
fn read_file(path: &Utf8Path) -> std::io::Result<String> {
    let name = path
        .file_name()
        .ok_or_else(|| std::io::Error::other("configuration path has no file name"))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    Dir::open_ambient_dir(dir, ambient_authority())?.read_to_string(name)
}
