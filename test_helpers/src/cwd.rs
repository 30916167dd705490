//! Working-directory guard for tests that rely on the default service
//! directory.
//!
//! The working directory is process-global. [`set_dir`] takes a lock that the
//! returned guard keeps until it drops, at which point the previous directory
//! is entered again.
//!
//! ```no_run
//! use serverless_parent_test_helpers::cwd;
//!
//! let _guard = cwd::set_dir("/tmp/service")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Context, Result};
use parking_lot::{Mutex, MutexGuard};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// Re-enters the previous working directory when dropped.
#[derive(Debug)]
#[must_use = "dropping the guard restores the previous working directory"]
pub struct CwdGuard {
    previous: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CwdGuard {
    /// Directory that will be restored on drop.
    #[must_use]
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _restored = std::env::set_current_dir(&self.previous);
    }
}

/// Enter `path` until the returned guard drops.
///
/// # Errors
///
/// Fails when the current directory cannot be read or `path` cannot be
/// entered.
pub fn set_dir(path: impl AsRef<Path>) -> Result<CwdGuard> {
    let lock = CWD_LOCK.lock();
    let previous = std::env::current_dir().context("read current directory")?;
    let target = path.as_ref();
    std::env::set_current_dir(target)
        .with_context(|| format!("enter directory {}", target.display()))?;
    Ok(CwdGuard {
        previous,
        _lock: lock,
    })
}
