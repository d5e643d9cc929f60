//! HTTP request types for the Weebly Cloud SDK.
//!
//! This module provides [`HttpMethod`] and [`CloudRequest`], the descriptor of
//! one API call: method, relative path and parameter map.
//!
//! Parameters travel either as a JSON body (POST, PUT, PATCH) or as a query
//! string (GET, DELETE). The JSON text returned by [`CloudRequest::body`] is
//! the exact string that is both signed and transmitted.

use std::fmt;

use serde_json::Value;

/// Parameter mapping sent with a request.
///
/// Keys keep their insertion order (`serde_json` is built with
/// `preserve_order`), so the same mapping always serializes to the same text
/// and response objects keep the order the server sent them in.
pub type Params = serde_json::Map<String, Value>;

/// HTTP methods supported by the Weebly Cloud API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and invoking actions.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case wire name used in the request line and signature.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` if parameters are sent as a JSON body.
    #[must_use]
    pub const fn carries_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A request to be sent to the Weebly Cloud API.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use weebly_cloud::clients::{CloudRequest, HttpMethod, Params};
///
/// let mut params = Params::new();
/// params.insert("email".to_string(), json!("a@b.c"));
///
/// let post = CloudRequest::new(HttpMethod::Post, "user", params.clone());
/// assert_eq!(post.body(), r#"{"email":"a@b.c"}"#);
///
/// let get = CloudRequest::new(HttpMethod::Get, "user", params);
/// assert_eq!(get.body(), "");
/// assert_eq!(get.query_pairs(), vec![("email".to_string(), "a@b.c".to_string())]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CloudRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The path relative to the API base URL, without query string.
    pub path: String,
    /// Parameters sent as body or query string depending on the method.
    pub params: Params,
}

impl CloudRequest {
    /// Creates a new request descriptor.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>, params: Params) -> Self {
        Self {
            method,
            path: path.into(),
            params,
        }
    }

    /// Returns the serialized body: JSON for body-bearing methods, empty otherwise.
    #[must_use]
    pub fn body(&self) -> String {
        if self.method.carries_body() {
            Value::Object(self.params.clone()).to_string()
        } else {
            String::new()
        }
    }

    /// Returns the stringified query parameters for GET and DELETE.
    ///
    /// Strings are sent verbatim; every other value is sent as its JSON text.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        if self.method.carries_body() {
            return Vec::new();
        }

        self.params
            .iter()
            .map(|(key, value)| (key.clone(), stringify(value)))
            .collect()
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
