//! YAML parsing and emission backed by `serde_norway`.
//!
//! Parsing goes through the typed [`serde_norway::Value`] so that nulls,
//! tags and merge keys are seen explicitly before the tree is turned into a
//! [`Document`].

use serde_json::{Map, Number, Value};
use serde_norway::Value as Yaml;
use serde_norway::value::TaggedValue;

use std::path::Path;
use std::sync::Arc;

use crate::error::{file_error, invalid_data};
use crate::{Document, ParentError, ParentResult};

/// Tags whose long form keeps the bare tag name as its key.
const BARE_TAGS: [&str; 2] = ["Ref", "Condition"];

/// Parse YAML `contents` read from `path` into a [`Document`].
///
/// Only `true`/`false` are booleans (`yes`/`no` stay strings). `~`, `null`
/// and empty values are null. Empty input, or input holding only comments,
/// yields an empty document. `<<` merge keys are expanded.
///
/// Tagged nodes keep their tag as a single-key mapping in CloudFormation long
/// form: `!Ref Bucket` becomes `{Ref: Bucket}` and `!GetAtt Fn.Arn` becomes
/// `{"Fn::GetAtt": Fn.Arn}`.
///
/// # Errors
///
/// Returns [`ParentError::Load`] tagged with `path` when the YAML is
/// malformed, its top level is not a mapping, a mapping key is not a scalar,
/// an integer falls outside the 64-bit range, or a number is infinite or NaN.
///
/// # Examples
///
/// ```
/// use serverless_parent::parse_document;
/// use std::path::Path;
///
/// let doc = parse_document(Path::new("serverless.yml"), "service: orders\n")?;
/// assert_eq!(doc["service"], "orders");
/// # Ok::<_, std::sync::Arc<serverless_parent::ParentError>>(())
/// ```
pub fn parse_document(path: &Path, contents: &str) -> ParentResult<Document> {
    if is_blank(contents) {
        return Ok(Document::new());
    }
    let mut yaml: Yaml = serde_norway::from_str(contents)
        .map_err(|err| file_error(path, format!("failed to parse YAML: {err}")))?;
    yaml.apply_merge()
        .map_err(|err| file_error(path, format!("failed to expand merge keys: {err}")))?;
    match to_json(yaml).map_err(|msg| invalid_data(path, msg))? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Document::new()),
        other => Err(invalid_data(
            path,
            format!(
                "top-level YAML value must be a mapping, found {}",
                type_name(&other)
            ),
        )),
    }
}

/// Serialise `document` as YAML text.
///
/// Strings that would read back as another type (`"1"`, `"true"`, `"~"`) are
/// quoted, so the output parses back to the same document.
///
/// # Errors
///
/// Returns [`ParentError::Render`] if the serialiser rejects the value.
pub fn to_yaml_string(document: &Document) -> ParentResult<String> {
    serde_norway::to_string(document).map_err(|err| {
        Arc::new(ParentError::Render {
            message: err.to_string(),
        })
    })
}

fn to_json(yaml: Yaml) -> Result<Value, String> {
    Ok(match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(flag) => Value::Bool(flag),
        Yaml::Number(number) => Value::Number(to_json_number(&number)?),
        Yaml::String(text) => Value::String(text),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(to_json)
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(key_string(key)?, to_json(value)?);
            }
            Value::Object(map)
        }
        Yaml::Tagged(tagged) => tagged_to_json(*tagged)?,
    })
}

fn to_json_number(number: &serde_norway::Number) -> Result<Number, String> {
    if let Some(unsigned) = number.as_u64() {
        return Ok(Number::from(unsigned));
    }
    if let Some(signed) = number.as_i64() {
        return Ok(Number::from(signed));
    }
    number
        .as_f64()
        .and_then(Number::from_f64)
        .ok_or_else(|| format!("unsupported non-finite number {number}"))
}

fn tagged_to_json(tagged: TaggedValue) -> Result<Value, String> {
    let TaggedValue { tag, value } = tagged;
    let rendered = tag.to_string();
    let name = rendered.trim_start_matches('!');
    let key = if BARE_TAGS.contains(&name) {
        name.to_owned()
    } else {
        format!("Fn::{name}")
    };
    let mut map = Map::with_capacity(1);
    map.insert(key, to_json(value)?);
    Ok(Value::Object(map))
}

fn key_string(key: Yaml) -> Result<String, String> {
    match key {
        Yaml::String(text) => Ok(text),
        Yaml::Number(number) => Ok(number.to_string()),
        Yaml::Bool(flag) => Ok(flag.to_string()),
        Yaml::Null => Ok("null".to_owned()),
        Yaml::Sequence(_) | Yaml::Mapping(_) | Yaml::Tagged(_) => {
            Err("mapping keys must be scalars".to_owned())
        }
    }
}

fn is_blank(contents: &str) -> bool {
    contents.lines().all(|line| {
        let trimmed = line.trim();
        trimmed.is_empty() || trimmed.starts_with('#')
    })
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
