//! JSON helpers shared by the entity implementations.
//!
//! The API returns entities in a few recurring shapes: wrapped in a key
//! (`{"user": {...}}`), as a top-level array of objects, as an array under a
//! key (`{"sites": [...]}`), or as an object keyed by id (`{"plans": {...}}`).

use serde_json::{Map, Value};

use crate::clients::{CloudError, Params};
use crate::rest::id_from_json;

/// Takes the object stored under `key` in a response body.
pub(crate) fn unwrap_object(
    body: Value,
    key: &str,
    name: &str,
) -> Result<Map<String, Value>, CloudError> {
    match body {
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Object(inner)) => Ok(inner),
            _ => Err(CloudError::unexpected(format!(
                "{name} response has no '{key}' object"
            ))),
        },
        other => Err(CloudError::unexpected(format!(
            "expected {name} object, got {other}"
        ))),
    }
}

/// Requires a response body to be a JSON object.
pub(crate) fn into_object(body: Value, name: &str) -> Result<Map<String, Value>, CloudError> {
    match body {
        Value::Object(map) => Ok(map),
        other => Err(CloudError::unexpected(format!(
            "expected {name} object, got {other}"
        ))),
    }
}

/// Reads a required id field from an entity object.
pub(crate) fn required_id(object: &Value, field: &str, name: &str) -> Result<String, CloudError> {
    id_from_json(object, field)
        .ok_or_else(|| CloudError::unexpected(format!("{name} is missing '{field}'")))
}

/// Returns the ancestor id at `index`.
pub(crate) fn ancestor<'a>(ids: &'a [String], index: usize, name: &str) -> Result<&'a str, CloudError> {
    ids.get(index)
        .map(String::as_str)
        .ok_or_else(|| CloudError::unexpected(format!("{name} list needs {} ancestor ids", index + 1)))
}

/// Converts an array of entity objects, reading each id from `id_field`.
pub(crate) fn objects_from_array<T>(
    array: &Value,
    id_field: &str,
    name: &str,
    build: impl Fn(String, Map<String, Value>) -> T,
) -> Result<Vec<T>, CloudError> {
    let items = array
        .as_array()
        .ok_or_else(|| CloudError::unexpected(format!("expected {name} array, got {array}")))?;

    items
        .iter()
        .map(|item| match item {
            Value::Object(map) => {
                let id = required_id(item, id_field, name)?;
                Ok(build(id, map.clone()))
            }
            other => Err(CloudError::unexpected(format!(
                "expected {name} object, got {other}"
            ))),
        })
        .collect()
}

/// Reads a required string field from a response body.
pub(crate) fn string_field(body: &Value, field: &str) -> Result<String, CloudError> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| CloudError::unexpected(format!("response has no '{field}' string")))
}

/// Returns `data` with `key` set to `value`.
pub(crate) fn with_param(mut data: Params, key: &str, value: impl Into<Value>) -> Params {
    data.insert(key.to_string(), value.into());
    data
}
