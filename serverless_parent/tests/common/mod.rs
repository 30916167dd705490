//! Shared fixtures for integration tests.
//!
//! [`ServiceTree`] lays out a temporary directory tree holding a service and
//! any number of parent documents, with the tree root acting as the home
//! directory that bounds discovery.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rstest::fixture;
use serverless_parent::{CONFIG_FILE_NAME, ServiceConfig, YamlLoader};
use tempfile::TempDir;

/// Temporary layout `<home>/org/team/project/services/<service>`.
pub struct ServiceTree {
    _guard: TempDir,
    /// Canonical root of the tree, used as the home directory.
    pub home: PathBuf,
}

impl ServiceTree {
    /// Directory of the service under test.
    pub fn service_dir(&self) -> PathBuf {
        self.home.join("org/team/project/services/orders")
    }

    /// Write `contents` as the service's own `serverless.yml`.
    pub fn write_service(&self, contents: &str) -> Result<PathBuf> {
        write_config(&self.service_dir(), contents)
    }

    /// Write a parent `serverless.yml` into `relative` (from the tree root).
    pub fn write_parent(&self, relative: &str, contents: &str) -> Result<PathBuf> {
        write_config(&self.home.join(relative), contents)
    }

    /// Load the service document, bounded by the tree's home directory.
    pub fn load_service(&self) -> Result<ServiceConfig> {
        ServiceConfig::load(self.service_dir(), &YamlLoader::new())
            .map(|svc| svc.with_home_dir(&self.home))
            .map_err(|err| anyhow::anyhow!(err.to_string()))
    }
}

fn write_config(dir: &Path, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let file = dir.join(CONFIG_FILE_NAME);
    fs::write(&file, contents).with_context(|| format!("write {}", file.display()))?;
    Ok(file)
}

/// Fresh service tree with the service directory already created.
#[fixture]
pub fn service_tree() -> Result<ServiceTree> {
    let guard = TempDir::new().context("create temp dir")?;
    let home = fs::canonicalize(guard.path()).context("canonicalise temp dir")?;
    let tree = ServiceTree {
        _guard: guard,
        home,
    };
    fs::create_dir_all(tree.service_dir()).context("create service directory")?;
    Ok(tree)
}
