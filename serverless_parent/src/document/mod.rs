//! Configuration documents: the in-memory model, the loader seam and the
//! YAML text format.

mod loader;
mod render;
mod yaml;

pub use loader::{DocumentLoader, YamlLoader};
pub use render::{EFFECTIVE_SECTIONS, effective_sections, render_effective};
pub use yaml::{parse_document, to_yaml_string};

/// Conventional file name of a service configuration document.
pub const CONFIG_FILE_NAME: &str = "serverless.yml";

/// Ordered mapping from top-level keys to nested configuration values.
///
/// Insertion order is preserved so rendered output follows the order in which
/// keys were written.
pub type Document = serde_json::Map<String, serde_json::Value>;

#[cfg(test)]
mod tests;
