//! Test helpers shared across crates in the workspace.
//!
//! Both modules guard process-global state (environment variables and the
//! working directory) behind RAII guards so tests touching `HOME` or relying
//! on a default service directory can run alongside each other.

pub mod cwd;
pub mod env;
