//! Request-time error types for the Weebly Cloud SDK.
//!
//! Every fallible network operation returns [`CloudError`]. The variants
//! separate failures the caller may retry (timeouts, network faults) from
//! failures reported by the API and from configuration problems.
//!
//! # Example
//!
//! ```rust,ignore
//! use weebly_cloud::CloudError;
//!
//! match client.get("user/123").await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(CloudError::Api { message, code }) => println!("API error {code}: {message}"),
//!     Err(CloudError::Status { code }) => println!("HTTP {code}"),
//!     Err(e) if e.is_retryable() => println!("try again later: {e}"),
//!     Err(e) => println!("giving up: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::error::ConfigError;

/// Code carried by [`CloudError::RequestTimeout`].
pub const TIMEOUT_CODE: i64 = 999;

/// Unified error type for all request-time failures.
#[derive(Debug, Error)]
pub enum CloudError {
    /// The request exceeded the configured connect/read timeout.
    #[error("Response timed out")]
    RequestTimeout,

    /// A network or connection error other than a timeout.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The response body carried a structured `error` object.
    #[error("{message}")]
    Api {
        /// The message reported by the server.
        message: String,
        /// The numeric code reported by the server.
        code: i64,
    },

    /// The response had an error status and no structured error body.
    #[error("Error performing request (HTTP {code})")]
    Status {
        /// The HTTP status code.
        code: u16,
    },

    /// The client is misconfigured and cannot authenticate.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A successful response carried a body that is not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response was valid JSON but not in the shape an entity expects.
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// What was missing or malformed.
        message: String,
    },

    /// The resource was deleted through this handle and can no longer be used.
    #[error("Resource at '{url}' has been deleted")]
    ResourceDeleted {
        /// The URL of the deleted resource.
        url: String,
    },
}

impl CloudError {
    /// Returns the numeric code associated with this error, if any.
    ///
    /// Server-reported errors return the server's code, generic HTTP errors
    /// return the status code and timeouts return [`TIMEOUT_CODE`].
    #[must_use]
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::RequestTimeout => Some(TIMEOUT_CODE),
            Self::Api { code, .. } => Some(*code),
            Self::Status { code } => Some(i64::from(*code)),
            _ => None,
        }
    }

    /// Returns `true` for transient failures a caller may retry.
    ///
    /// The SDK itself never retries.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RequestTimeout | Self::Network(_))
    }

    pub(crate) fn unexpected(message: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for CloudError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::RequestTimeout
        } else {
            Self::Network(error)
        }
    }
}
