//! Deep-merge engine combining a parent document with a service's own.
//!
//! The engine decides the winning side up front and then performs a single
//! keyed deep merge, so the result never depends on the order in which the
//! documents were mutated. Both inputs are borrowed and left untouched.

use serde_json::{Map, Value};

use crate::Document;

/// Overlay `layer` onto `target` in place; `layer` wins every conflict.
///
/// Two mappings are merged key by key. Anything else in `layer` (a sequence,
/// scalar or null) replaces whatever `target` held, and a mapping layered over
/// a non-mapping starts from an empty mapping.
///
/// ```rust
/// use serverless_parent::merge_value;
/// use serde_json::json;
///
/// let mut provider = json!({"name": "aws", "environment": {"LOG": "info"}});
/// merge_value(&mut provider, json!({"environment": {"TZ": "UTC"}, "stage": "prod"}));
/// assert_eq!(provider["environment"], json!({"LOG": "info", "TZ": "UTC"}));
///
/// merge_value(&mut provider, json!({"layers": ["arn:shared"]}));
/// merge_value(&mut provider, json!({"layers": ["arn:own"]}));
/// assert_eq!(provider["layers"], json!(["arn:own"]));
/// ```
pub fn merge_value(target: &mut Value, layer: Value) {
    match layer {
        Value::Object(map) => merge_object(target, map),
        _ => *target = layer,
    }
}

fn merge_object(target: &mut Value, layer: Map<String, Value>) {
    if let Value::Object(existing) = target {
        merge_into_map(existing, layer);
    } else {
        *target = Value::Object(layer);
    }
}

fn merge_into_map(target: &mut Map<String, Value>, layer: Map<String, Value>) {
    for (key, value) in layer {
        match target.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}

/// Combine `parent` and `child` into the effective service document.
///
/// When `overwrite_service_config` is `true` the parent wins every conflict;
/// when `false` the child does. Conflicts between two mappings are resolved
/// recursively with the same rule, while any other conflict is settled by
/// taking the winner's value whole. Keys present on only one side are carried
/// over unchanged, and the child's key order is kept ahead of keys that only
/// the parent defines.
///
/// Pass the child as it was *before* any merge: the override flag and the
/// child-wins values are both taken from it.
///
/// # Examples
///
/// ```rust
/// use serverless_parent::{Document, merge_configurations};
/// use serde_json::json;
///
/// let as_doc = |v: serde_json::Value| -> Document {
///     v.as_object().cloned().unwrap_or_default()
/// };
/// let child = as_doc(json!({"provider": {"stage": "dev"}}));
/// let parent = as_doc(json!({"provider": {"stage": "prod", "region": "us-east-1"}}));
///
/// let merged = merge_configurations(&child, &parent, false);
/// assert_eq!(merged["provider"], json!({"stage": "dev", "region": "us-east-1"}));
///
/// let merged = merge_configurations(&child, &parent, true);
/// assert_eq!(merged["provider"]["stage"], json!("prod"));
/// ```
#[must_use]
pub fn merge_configurations(
    child: &Document,
    parent: &Document,
    overwrite_service_config: bool,
) -> Document {
    if overwrite_service_config {
        let mut merged = child.clone();
        merge_into_map(&mut merged, parent.clone());
        merged
    } else {
        let mut merged = child.clone();
        for (key, value) in parent {
            fill_missing(&mut merged, key, value);
        }
        merged
    }
}

/// Add `key` from the losing side without disturbing the winner's values.
///
/// Only nested mappings present on both sides are descended into; every other
/// existing entry already holds the winner's value.
fn fill_missing(winner: &mut Map<String, Value>, key: &str, loser: &Value) {
    match winner.get_mut(key) {
        None => {
            winner.insert(key.to_owned(), loser.clone());
        }
        Some(Value::Object(nested)) => {
            if let Value::Object(loser_map) = loser {
                for (inner_key, inner_value) in loser_map {
                    fill_missing(nested, inner_key, inner_value);
                }
            }
        }
        Some(_) => {}
    }
}
