//! HTTP response types for the Weebly Cloud SDK.
//!
//! This module provides [`CloudResponse`], the validated envelope around one
//! API response, and [`Pagination`], the result-set metadata parsed from the
//! `X-Resultset-*` headers.
//!
//! Construction is where error classification happens: a body carrying an
//! `error` object always wins over the HTTP status, so callers see the
//! server's own message and code.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::CloudError;
use crate::clients::http_client::CloudClient;
use crate::clients::http_request::Params;

/// Header carrying the total number of results across all pages.
pub const TOTAL_HEADER: &str = "x-resultset-total";
/// Header carrying the maximum number of results per page.
pub const LIMIT_HEADER: &str = "x-resultset-limit";
/// Header carrying the current page number (1-based).
pub const PAGE_HEADER: &str = "x-resultset-page";

/// Result-set metadata for a paginated endpoint.
///
/// # Example
///
/// ```rust
/// use weebly_cloud::clients::Pagination;
///
/// let pagination = Pagination { total: 25, limit: 10, page: 1 };
/// assert_eq!(pagination.page_count(), 3);
/// assert!(pagination.has_next());
/// assert!(!pagination.has_previous());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Total number of results reported by the server.
    pub total: u64,
    /// Maximum number of results per page.
    pub limit: u64,
    /// Current page number.
    pub page: u64,
}

impl Pagination {
    /// Parses pagination metadata from lower-cased response headers.
    ///
    /// Returns `None` unless a numeric page header is present. Missing or
    /// unparsable total and limit headers are read as zero.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let read = |name: &str| -> Option<u64> {
            headers
                .get(name)
                .and_then(|values| values.first())
                .and_then(|value| value.trim().parse().ok())
        };

        let page = read(PAGE_HEADER)?;
        Some(Self {
            total: read(TOTAL_HEADER).unwrap_or(0),
            limit: read(LIMIT_HEADER).unwrap_or(0),
            page,
        })
    }

    /// Returns the number of pages, `ceil(total / limit)`.
    ///
    /// A zero limit yields zero pages.
    #[must_use]
    pub const fn page_count(&self) -> u64 {
        if self.limit == 0 {
            0
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    /// Returns `true` if the server reported a positive page number.
    #[must_use]
    pub const fn is_paginated(&self) -> bool {
        self.page > 0
    }

    /// Returns `true` if a page after the current one exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.is_paginated() && self.page < self.page_count()
    }

    /// Returns `true` if a page before the current one exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.is_paginated() && self.page > 1
    }
}

/// A validated response from the Weebly Cloud API.
///
/// The request path and parameters are retained so the adjacent pages of a
/// paginated result can be requested with [`next_page`](Self::next_page) and
/// [`previous_page`](Self::previous_page).
#[derive(Clone, Debug, PartialEq)]
pub struct CloudResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The request path, relative to the API base URL.
    pub path: String,
    /// The parameters the request was sent with.
    pub params: Params,
    /// The parsed body; `Value::Null` for empty and 204 responses.
    pub body: Value,
    /// Result-set metadata, if the endpoint reported any.
    pub pagination: Option<Pagination>,
}

impl CloudResponse {
    /// Builds an envelope from the raw parts of an HTTP response.
    ///
    /// `headers` must be keyed by lower-cased header name.
    ///
    /// # Errors
    ///
    /// - [`CloudError::Api`] if the body is an object with an `error` field,
    ///   whatever the status
    /// - [`CloudError::Status`] if the status is 400 or above
    /// - [`CloudError::Decode`] if a successful response has a non-JSON body
    pub fn new(
        status: u16,
        path: impl Into<String>,
        params: Params,
        headers: &HashMap<String, Vec<String>>,
        body_text: &str,
    ) -> Result<Self, CloudError> {
        let body = parse_body(status, body_text)?;

        Ok(Self {
            status,
            path: path.into(),
            params,
            body,
            pagination: Pagination::from_headers(headers),
        })
    }

    /// Returns `true` if this response is one page of a larger result set.
    #[must_use]
    pub fn is_paginated(&self) -> bool {
        self.pagination.is_some_and(|p| p.is_paginated())
    }

    /// Returns the server-reported total, if paginated.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.paginated().map(|p| p.total)
    }

    /// Returns the current page number, if paginated.
    #[must_use]
    pub fn page(&self) -> Option<u64> {
        self.paginated().map(|p| p.page)
    }

    /// Returns the per-page limit, if paginated.
    #[must_use]
    pub fn limit(&self) -> Option<u64> {
        self.paginated().map(|p| p.limit)
    }

    /// Returns the number of pages, if paginated.
    #[must_use]
    pub fn page_count(&self) -> Option<u64> {
        self.paginated().map(|p| p.page_count())
    }

    fn paginated(&self) -> Option<Pagination> {
        self.pagination.filter(Pagination::is_paginated)
    }

    /// Fetches the page after this one.
    ///
    /// Returns `Ok(None)` when the response is not paginated or is already
    /// the last page. The retained parameters are copied, never mutated.
    ///
    /// # Errors
    ///
    /// Returns any [`CloudError`] raised by the follow-up request.
    pub async fn next_page(&self, client: &CloudClient) -> Result<Option<Self>, CloudError> {
        match self.paginated() {
            Some(p) if p.has_next() => self.fetch_page(client, p.page + 1).await.map(Some),
            _ => Ok(None),
        }
    }

    /// Fetches the page before this one.
    ///
    /// Returns `Ok(None)` when the response is not paginated or is the first page.
    ///
    /// # Errors
    ///
    /// Returns any [`CloudError`] raised by the follow-up request.
    pub async fn previous_page(&self, client: &CloudClient) -> Result<Option<Self>, CloudError> {
        match self.paginated() {
            Some(p) if p.has_previous() => self.fetch_page(client, p.page - 1).await.map(Some),
            _ => Ok(None),
        }
    }

    async fn fetch_page(&self, client: &CloudClient, page: u64) -> Result<Self, CloudError> {
        let mut params = self.params.clone();
        params.insert("page".to_string(), Value::from(page));
        client.get_with(&self.path, params).await
    }
}

/// Classifies and parses a response body.
fn parse_body(status: u16, body_text: &str) -> Result<Value, CloudError> {
    if status == 204 || body_text.trim().is_empty() {
        return if status >= 400 {
            Err(CloudError::Status { code: status })
        } else {
            Ok(Value::Null)
        };
    }

    let body: Value = match serde_json::from_str(body_text) {
        Ok(body) => body,
        Err(_) if status >= 400 => return Err(CloudError::Status { code: status }),
        Err(e) => return Err(CloudError::Decode(e)),
    };

    if let Some(error) = body.as_object().and_then(|o| o.get("error")) {
        return Err(api_error(error, status));
    }

    if status >= 400 {
        return Err(CloudError::Status { code: status });
    }

    Ok(body)
}

fn api_error(error: &Value, status: u16) -> CloudError {
    let message = match error.get("message").unwrap_or(error) {
        Value::String(s) => s.clone(),
        Value::Null => "Unknown error".to_string(),
        other => other.to_string(),
    };

    let code = error
        .get("code")
        .and_then(|code| match code {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .unwrap_or_else(|| i64::from(status));

    CloudError::Api { message, code }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_lowercase(), vec![(*v).to_string()]))
            .collect()
    }

    fn response(status: u16, pairs: &[(&str, &str)], body: &str) -> Result<CloudResponse, CloudError> {
        CloudResponse::new(status, "user/1/site", Params::new(), &headers(pairs), body)
    }

    #[test]
    fn test_page_count_rounds_up() {
        let cases = [(25, 10, 3), (20, 10, 2), (1, 10, 1), (0, 10, 0), (10, 0, 0)];
        for (total, limit, expected) in cases {
            let p = Pagination { total, limit, page: 1 };
            assert_eq!(p.page_count(), expected, "total={total} limit={limit}");
        }
    }

    #[test]
    fn test_has_next_and_previous_boundaries() {
        let first = Pagination { total: 25, limit: 10, page: 1 };
        let middle = Pagination { page: 2, ..first };
        let last = Pagination { page: 3, ..first };

        assert!(first.has_next() && !first.has_previous());
        assert!(middle.has_next() && middle.has_previous());
        assert!(!last.has_next() && last.has_previous());
        assert!(!Pagination::default().has_next());
    }

    #[test]
    fn test_pagination_parsed_from_headers() {
        let res = response(
            200,
            &[
                ("X-Resultset-Total", "25"),
                ("X-Resultset-Limit", "10"),
                ("X-Resultset-Page", "1"),
            ],
            "[]",
        )
        .unwrap();

        assert!(res.is_paginated());
        assert_eq!(res.total(), Some(25));
        assert_eq!(res.limit(), Some(10));
        assert_eq!(res.page(), Some(1));
        assert_eq!(res.page_count(), Some(3));
    }

    #[test]
    fn test_missing_page_header_is_not_paginated() {
        let res = response(200, &[("X-Resultset-Total", "25")], "[]").unwrap();
        assert!(!res.is_paginated());
        assert!(res.pagination.is_none());
        assert_eq!(res.total(), None);
    }

    #[test]
    fn test_zero_page_is_not_paginated() {
        let res = response(200, &[("X-Resultset-Page", "0")], "[]").unwrap();
        assert!(res.pagination.is_some());
        assert!(!res.is_paginated());
        assert_eq!(res.page_count(), None);
    }

    #[test]
    fn test_unparsable_page_header_is_absent() {
        let res = response(200, &[("X-Resultset-Page", "first")], "[]").unwrap();
        assert!(res.pagination.is_none());
    }

    #[test]
    fn test_no_content_yields_null_body() {
        assert_eq!(response(204, &[], "").unwrap().body, Value::Null);
        assert_eq!(response(200, &[], "").unwrap().body, Value::Null);
    }

    #[test]
    fn test_structured_error_beats_status() {
        let err = response(404, &[], r#"{"error":{"message":"Not found","code":404}}"#).unwrap_err();
        match err {
            CloudError::Api { message, code } => {
                assert_eq!(message, "Not found");
                assert_eq!(code, 404);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_structured_error_on_success_status_still_fails() {
        let err = response(200, &[], r#"{"error":{"message":"Quota","code":12}}"#).unwrap_err();
        assert!(matches!(err, CloudError::Api { code: 12, .. }));
    }

    #[test]
    fn test_structured_error_code_defaults_to_status() {
        let err = response(422, &[], r#"{"error":{"message":"Invalid"}}"#).unwrap_err();
        assert!(matches!(err, CloudError::Api { code: 422, .. }));

        let err = response(400, &[], r#"{"error":"plain text"}"#).unwrap_err();
        match err {
            CloudError::Api { message, code } => {
                assert_eq!(message, "plain text");
                assert_eq!(code, 400);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_status_without_structured_body() {
        let err = response(500, &[], r#"{"detail":"boom"}"#).unwrap_err();
        assert!(matches!(err, CloudError::Status { code: 500 }));

        let err = response(502, &[], "<html>Bad gateway</html>").unwrap_err();
        assert!(matches!(err, CloudError::Status { code: 502 }));

        let err = response(404, &[], "").unwrap_err();
        assert!(matches!(err, CloudError::Status { code: 404 }));
    }

    #[test]
    fn test_invalid_json_on_success_is_decode_error() {
        let err = response(200, &[], "not json").unwrap_err();
        assert!(matches!(err, CloudError::Decode(_)));
    }

    #[test]
    fn test_array_and_scalar_bodies_are_accepted() {
        assert_eq!(response(200, &[], "[1,2]").unwrap().body, json!([1, 2]));
        assert_eq!(response(200, &[], "true").unwrap().body, json!(true));
    }
}
