//! The service whose configuration inherits from a parent.
//!
//! [`ServiceConfig`] owns the service's active document explicitly, standing
//! in for the long-lived host object that would otherwise hold it. Inheriting
//! a parent mutates that document in place; nothing here reaches into global
//! state besides the default home-directory lookup.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    CONFIG_FILE_NAME, Document, DocumentLoader, ParentLocator, ParentReference, ParentResult,
    merge_configurations, render_effective,
};

/// Report of a successful [`ServiceConfig::inherit_parent`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct InheritOutcome {
    /// Path of the parent document that was merged in.
    pub parent_path: PathBuf,
    /// Direction applied on conflicts: `true` when the parent won.
    pub overwrite_service_config: bool,
    /// Always `true`: the document changed, so any variable resolution done
    /// against the previous document must be re-run by the caller.
    pub needs_variable_resolution: bool,
}

/// A service directory together with its active configuration document.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    service_dir: PathBuf,
    document: Document,
    home_dir: Option<PathBuf>,
}

impl ServiceConfig {
    /// Wrap an already-parsed `document` belonging to `service_dir`.
    #[must_use]
    pub fn new(service_dir: impl Into<PathBuf>, document: Document) -> Self {
        Self {
            service_dir: service_dir.into(),
            document,
            home_dir: None,
        }
    }

    /// Load `serverless.yml` from `service_dir` using `loader`.
    ///
    /// # Errors
    ///
    /// Propagates any [`crate::ParentError::Load`] reported by the loader.
    pub fn load<L>(service_dir: impl Into<PathBuf>, loader: &L) -> ParentResult<Self>
    where
        L: DocumentLoader + ?Sized,
    {
        let dir = service_dir.into();
        let document = loader.load(&dir.join(CONFIG_FILE_NAME))?;
        Ok(Self::new(dir, document))
    }

    /// Bound auto-discovery by `home_dir` instead of the user's home.
    #[must_use]
    pub fn with_home_dir(mut self, home_dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home_dir.into());
        self
    }

    /// Directory holding the service's own configuration.
    #[must_use]
    pub fn service_dir(&self) -> &Path {
        &self.service_dir
    }

    /// The active configuration document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Consume the service, returning its active document.
    #[must_use]
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Decode the `custom.parent` block of the active document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ParentError::InvalidReference`] when the block is
    /// malformed.
    pub fn parent_reference(&self) -> ParentResult<ParentReference> {
        ParentReference::from_document(&self.document)
    }

    /// Build the locator used for this service.
    #[must_use]
    pub fn locator(&self) -> ParentLocator {
        let locator = ParentLocator::new(&self.service_dir);
        match &self.home_dir {
            Some(home) => locator.with_home_dir(home),
            None => locator,
        }
    }

    /// Locate, load and merge the parent configuration into this service.
    ///
    /// The parent reference is decoded before anything is merged, so a parent
    /// that defines its own `custom.parent` block cannot change how it is
    /// merged. On success the active document is replaced by the effective
    /// one; on any failure it is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ParentError::InvalidReference`] for a malformed
    /// `custom.parent` block, [`crate::ParentError::Discovery`] or
    /// [`crate::ParentError::ServiceDir`] when no parent can be located, and
    /// the loader's error unchanged when the parent cannot be loaded.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use serverless_parent::{ServiceConfig, YamlLoader};
    ///
    /// let loader = YamlLoader::new();
    /// let mut service = ServiceConfig::load("services/orders", &loader)?;
    /// let outcome = service.inherit_parent(&loader)?;
    /// assert!(outcome.needs_variable_resolution);
    /// # Ok::<_, std::sync::Arc<serverless_parent::ParentError>>(())
    /// ```
    pub fn inherit_parent<L>(&mut self, loader: &L) -> ParentResult<InheritOutcome>
    where
        L: DocumentLoader + ?Sized,
    {
        let reference = self.parent_reference()?;
        let parent_path = self.locator().locate(&reference)?;
        let parent = loader.load(&parent_path)?;

        self.document = merge_configurations(
            &self.document,
            &parent,
            reference.overwrite_service_config,
        );
        info!(
            parent = %parent_path.display(),
            overwrite_service_config = reference.overwrite_service_config,
            "merged parent configuration"
        );

        Ok(InheritOutcome {
            parent_path,
            overwrite_service_config: reference.overwrite_service_config,
            needs_variable_resolution: true,
        })
    }

    /// Render the whitelisted sections of the active document as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ParentError::Render`] if YAML emission fails.
    pub fn render_effective(&self) -> ParentResult<String> {
        render_effective(&self.document)
    }
}

#[cfg(test)]
mod tests;
