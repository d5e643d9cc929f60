//! HTTP client types for Weebly Cloud API communication.
//!
//! This module provides the transport layer for making signed requests to
//! the Weebly Cloud API. It handles request signing, request/response
//! processing, error classification and result-set pagination.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`CloudClient`]: The async HTTP client for API communication
//! - [`CloudRequest`]: A request to be sent to the API
//! - [`CloudResponse`]: A validated response from the API
//! - [`Pagination`]: Result-set metadata from the `X-Resultset-*` headers
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`CloudError`]: Request-time error type
//! - [`signing`]: The request signature algorithm
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use weebly_cloud::clients::{CloudClient, Params};
//!
//! let client = CloudClient::configure("public-key", "secret")?;
//!
//! let mut params = Params::new();
//! params.insert("limit".to_string(), json!(10));
//!
//! let mut page = client.get_with("user/42/site", params).await?;
//! while let Some(next) = page.next_page(&client).await? {
//!     println!("page {:?}: {}", next.page(), next.body);
//!     page = next;
//! }
//! ```
//!
//! # Retry Behavior
//!
//! The client never retries. Every request is bounded by the configured
//! timeout (3 seconds by default); callers may use
//! [`CloudError::is_retryable`] to decide whether to try again.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod signing;

pub use errors::{CloudError, TIMEOUT_CODE};
pub use http_client::{CloudClient, SDK_VERSION};
pub use http_request::{CloudRequest, HttpMethod, Params};
pub use http_response::{CloudResponse, Pagination, LIMIT_HEADER, PAGE_HEADER, TOTAL_HEADER};
