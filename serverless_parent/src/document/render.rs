//! Rendering of the effective configuration for human inspection.

use serde_json::Value;

use super::yaml::to_yaml_string;
use crate::{Document, ParentResult};

/// Top-level sections included when printing the effective configuration,
/// in output order.
pub const EFFECTIVE_SECTIONS: [&str; 6] = [
    "custom",
    "functions",
    "package",
    "provider",
    "resources",
    "service",
];

/// Select the whitelisted sections of `document`.
///
/// Sections that are missing, `null`, or empty (an empty mapping, sequence or
/// string) are left out entirely.
#[must_use]
pub fn effective_sections(document: &Document) -> Document {
    EFFECTIVE_SECTIONS
        .iter()
        .filter_map(|section| {
            document
                .get(*section)
                .filter(|value| !is_empty(value))
                .map(|value| ((*section).to_owned(), value.clone()))
        })
        .collect()
}

/// Serialise the whitelisted sections of `document` as YAML.
///
/// # Errors
///
/// Returns [`crate::ParentError::Render`] if YAML emission fails.
///
/// # Examples
///
/// ```
/// use serverless_parent::{parse_document, render_effective};
/// use std::path::Path;
///
/// let doc = parse_document(
///     Path::new("serverless.yml"),
///     "service: orders\nplugins: [a]\nfunctions: {}\n",
/// )?;
/// let text = render_effective(&doc)?;
/// assert!(text.contains("service: orders"));
/// assert!(!text.contains("plugins"));
/// assert!(!text.contains("functions"));
/// # Ok::<_, std::sync::Arc<serverless_parent::ParentError>>(())
/// ```
pub fn render_effective(document: &Document) -> ParentResult<String> {
    to_yaml_string(&effective_sections(document))
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(text) => text.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
