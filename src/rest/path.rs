//! Path building for Weebly Cloud resources.
//!
//! Every resource is addressed by a path-shaped URL built from a template and
//! the ids of the resource and its ancestors:
//!
//! ```rust
//! use weebly_cloud::rest::build_path;
//!
//! let url = build_path("user/{user_id}/site/{site_id}", &[("user_id", "42"), ("site_id", "7")]);
//! assert_eq!(url, "user/42/site/7");
//! ```
//!
//! Id values are percent-encoded, so a caller-supplied id can never change
//! the shape of the path. The encoded path is the one that is both signed and
//! sent.

use serde_json::Value;

/// Builds a URL from a template by interpolating percent-encoded ids.
///
/// Replaces `{id_name}` placeholders in the template with the matching
/// value. Placeholders without a value are left untouched.
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(value));
    }

    result
}

/// Reads an id field from a JSON object as a string.
///
/// The API returns ids as strings on some endpoints and as numbers on others;
/// both are accepted.
#[must_use]
pub fn id_from_json(json: &Value, field: &str) -> Option<String> {
    match json.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
