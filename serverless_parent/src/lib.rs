//! Parent configuration inheritance for serverless service definitions.
//!
//! A service's `serverless.yml` may inherit shared settings from a parent
//! document elsewhere in the filesystem tree. The parent is either named
//! explicitly under `custom.parent.path` or discovered by walking up from the
//! service directory. Once located and loaded, the parent is deep-merged with
//! the service document; `custom.parent.overwriteServiceConfig` decides which
//! side wins conflicting keys.
//!
//! ```rust,no_run
//! use serverless_parent::{ServiceConfig, YamlLoader};
//!
//! let loader = YamlLoader::new();
//! let mut service = ServiceConfig::load(".", &loader)?;
//! service.inherit_parent(&loader)?;
//! print!("{}", service.render_effective()?);
//! # Ok::<_, std::sync::Arc<serverless_parent::ParentError>>(())
//! ```

mod document;
mod error;
mod locator;
mod merge;
mod reference;
mod service;

pub use document::{
    CONFIG_FILE_NAME, Document, DocumentLoader, EFFECTIVE_SECTIONS, YamlLoader,
    effective_sections, parse_document, render_effective, to_yaml_string,
};
pub use error::{ParentError, ParentResult};
pub use locator::{MAX_LEVELS_CEILING, ParentLocator};
pub use merge::{merge_configurations, merge_value};
pub use reference::{DEFAULT_MAX_LEVELS, ParentReference};
pub use service::{InheritOutcome, ServiceConfig};
