//! Tests for the inherit-parent orchestration using an in-memory loader.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use serde_json::{Value, json};

use super::ServiceConfig;
use crate::error::file_error;
use crate::{Document, DocumentLoader, ParentError, ParentResult};

/// Loader serving documents from memory and recording requested paths.
#[derive(Default)]
struct MemoryLoader {
    documents: HashMap<PathBuf, Document>,
    requests: RefCell<Vec<PathBuf>>,
}

impl MemoryLoader {
    fn with(mut self, path: &str, value: Value) -> Result<Self> {
        let document = value
            .as_object()
            .cloned()
            .ok_or_else(|| anyhow!("fixture must be a JSON object"))?;
        self.documents.insert(PathBuf::from(path), document);
        Ok(self)
    }
}

impl DocumentLoader for MemoryLoader {
    fn load(&self, path: &Path) -> ParentResult<Document> {
        self.requests.borrow_mut().push(path.to_path_buf());
        self.documents.get(path).cloned().ok_or_else(|| {
            file_error(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such document"),
            )
        })
    }
}

fn service(value: Value) -> Result<ServiceConfig> {
    let document = value
        .as_object()
        .cloned()
        .ok_or_else(|| anyhow!("fixture must be a JSON object"))?;
    Ok(ServiceConfig::new("/work/svc", document))
}

#[rstest]
fn explicit_parent_is_loaded_and_merged() -> Result<()> {
    let loader = MemoryLoader::default().with(
        "/work/svc/../shared/serverless.yml",
        json!({"provider": {"runtime": "node"}}),
    )?;
    let mut svc = service(json!({"custom": {"parent": {"path": "../shared"}}}))?;

    let outcome = svc
        .inherit_parent(&loader)
        .map_err(|err| anyhow!(err.to_string()))?;

    ensure!(
        outcome.parent_path == Path::new("/work/svc/../shared/serverless.yml"),
        "unexpected parent path {:?}",
        outcome.parent_path
    );
    ensure!(outcome.overwrite_service_config, "parent wins by default");
    ensure!(outcome.needs_variable_resolution, "caller must re-resolve variables");
    ensure!(
        svc.document().get("provider") == Some(&json!({"runtime": "node"})),
        "provider not inherited: {:?}",
        svc.document()
    );
    ensure!(
        svc.document().get("custom") == Some(&json!({"parent": {"path": "../shared"}})),
        "custom.parent.path must be preserved"
    );
    Ok(())
}

#[rstest]
fn override_flag_is_read_before_the_merge() -> Result<()> {
    let loader = MemoryLoader::default().with(
        "/work/shared/serverless.yml",
        json!({
            "provider": {"stage": "prod", "region": "us-east-1"},
            "custom": {"parent": {"overwriteServiceConfig": true, "path": "/elsewhere"}}
        }),
    )?;
    let mut svc = service(json!({
        "provider": {"stage": "dev"},
        "custom": {"parent": {"path": "/work/shared", "overwriteServiceConfig": false}}
    }))?;

    let outcome = svc
        .inherit_parent(&loader)
        .map_err(|err| anyhow!(err.to_string()))?;

    ensure!(!outcome.overwrite_service_config, "child flag must be honoured");
    ensure!(
        svc.document().get("provider") == Some(&json!({"stage": "dev", "region": "us-east-1"})),
        "unexpected provider {:?}",
        svc.document().get("provider")
    );
    ensure!(
        loader.requests.borrow().as_slice() == [PathBuf::from("/work/shared/serverless.yml")],
        "parent must be loaded exactly once"
    );
    Ok(())
}

#[rstest]
fn load_failures_propagate_and_leave_the_document_untouched() -> Result<()> {
    let loader = MemoryLoader::default();
    let original = json!({"service": "orders", "custom": {"parent": {"path": "../missing"}}});
    let mut svc = service(original.clone())?;

    let Err(err) = svc.inherit_parent(&loader) else {
        return Err(anyhow!("expected the missing parent to fail"));
    };

    ensure!(err.is_load(), "expected the loader's error, got {err:?}");
    ensure!(
        Value::Object(svc.document().clone()) == original,
        "document changed after a failed inherit"
    );
    Ok(())
}

#[rstest]
fn malformed_references_fail_before_loading() -> Result<()> {
    let loader = MemoryLoader::default();
    let mut svc = service(json!({"custom": {"parent": {"maxLevels": "three"}}}))?;

    let Err(err) = svc.inherit_parent(&loader) else {
        return Err(anyhow!("expected the malformed reference to fail"));
    };

    ensure!(
        matches!(err.as_ref(), ParentError::InvalidReference { .. }),
        "unexpected error {err:?}"
    );
    ensure!(loader.requests.borrow().is_empty(), "loader must not be called");
    Ok(())
}

#[rstest]
fn home_directory_override_reaches_the_locator() -> Result<()> {
    let svc = service(json!({}))?.with_home_dir("/work");
    let locator = svc.locator();
    ensure!(
        locator.home_dir() == Some(Path::new("/work")),
        "unexpected home {:?}",
        locator.home_dir()
    );
    ensure!(locator.service_dir() == Path::new("/work/svc"), "unexpected service dir");
    Ok(())
}

#[rstest]
fn service_documents_load_from_the_conventional_file() -> Result<()> {
    let loader = MemoryLoader::default().with("/work/svc/serverless.yml", json!({"service": "orders"}))?;

    let svc = ServiceConfig::load("/work/svc", &loader).map_err(|err| anyhow!(err.to_string()))?;

    ensure!(
        svc.into_document().get("service") == Some(&json!("orders")),
        "service document not loaded"
    );
    Ok(())
}
