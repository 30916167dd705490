//! Filesystem path helpers used while locating parent configuration.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use dirs::home_dir;

/// Canonicalise `p` using platform-specific rules.
///
/// Returns an absolute, normalised path with symlinks resolved. On Windows the
/// `dunce` crate is used to avoid introducing UNC prefixes in diagnostic
/// messages.
pub(super) fn canonicalise(p: &Path) -> std::io::Result<PathBuf> {
    #[cfg(windows)]
    {
        dunce::canonicalize(p)
    }
    #[cfg(not(windows))]
    {
        std::fs::canonicalize(p)
    }
}

/// Resolve the current user's home directory.
///
/// `HOME` wins, then `USERPROFILE`, then the platform lookup from `dirs`.
pub(super) fn default_home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|value| !value.is_empty())
        .or_else(|| std::env::var_os("USERPROFILE").filter(|value| !value.is_empty()))
        .map(PathBuf::from)
        .or_else(home_dir)
}

/// Returns `true` when `path` already names a YAML file rather than a
/// directory.
pub(super) fn names_config_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
}
