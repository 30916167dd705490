//! Helpers for safely mutating environment variables in tests.
//!
//! Each mutation holds a global re-entrant mutex for the duration of the
//! set/remove call and returns an RAII guard that restores the previous value
//! (or removes the variable again) when dropped. Use [`lock`] when a test
//! needs several variables to stay consistent for its whole body.
//!
//! # Examples
//!
//! ```
//! use serverless_parent_test_helpers::env;
//!
//! let _home = env::set_var("HOME", "/tmp/home");
//! // `HOME` points at `/tmp/home` until `_home` is dropped.
//! ```

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _guard = ENV_MUTEX.lock();
        match self.original.take() {
            // SAFETY: `ENV_MUTEX` is held for the restoration.
            Some(value) => unsafe { env::set_var(&self.key, value) },
            // SAFETY: `ENV_MUTEX` is held for the restoration.
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

/// RAII guard serialising environment access for its lifetime.
#[must_use = "dropping releases the environment lock"]
pub struct EnvVarLock {
    _guard: ReentrantMutexGuard<'static, ()>,
}

/// Acquire the global environment lock until the returned guard drops.
///
/// The lock is re-entrant, so [`set_var`] and [`remove_var`] may still be
/// called from the same thread while it is held.
pub fn lock() -> EnvVarLock {
    EnvVarLock {
        _guard: ENV_MUTEX.lock(),
    }
}

/// Sets an environment variable and returns a guard restoring its prior value.
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    mutate(key.into(), |k| {
        // SAFETY: `ENV_MUTEX` is held by `mutate`.
        unsafe { env::set_var(k, value.as_ref()) };
    })
}

/// Removes an environment variable and returns a guard restoring its prior
/// value.
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    mutate(key.into(), |k| {
        // SAFETY: `ENV_MUTEX` is held by `mutate`.
        unsafe { env::remove_var(k) };
    })
}

fn mutate<F>(key: String, mutator: F) -> EnvVarGuard
where
    F: FnOnce(&str),
{
    let _guard = ENV_MUTEX.lock();
    let original = env::var_os(&key);
    mutator(&key);
    EnvVarGuard { key, original }
}
