//! Error types for the Weebly Cloud SDK.
//!
//! This module contains the configuration error type. Errors raised while
//! talking to the API live in [`crate::clients::CloudError`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. A `ConfigError` is never retryable: the client
//! cannot authenticate until the configuration is fixed.
//!
//! # Example
//!
//! ```rust
//! use weebly_cloud::{ConfigError, PublicKey};
//!
//! let result = PublicKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyPublicKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the SDK.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Public key cannot be empty.
    #[error("Public key cannot be empty. Please provide a valid Weebly Cloud API key.")]
    EmptyPublicKey,

    /// Secret key cannot be empty.
    #[error("Secret key cannot be empty. Please provide a valid Weebly Cloud API secret.")]
    EmptySecretKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.weeblycloud.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The keyed hash used to sign requests could not be initialised.
    #[error("Request signing is unavailable: {reason}")]
    SigningUnavailable {
        /// Why the signing primitive could not be used.
        reason: String,
    },

    /// The underlying HTTP transport could not be created.
    #[error("Failed to initialise HTTP transport: {reason}")]
    TransportInit {
        /// The error reported by the transport builder.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_public_key_error_message() {
        let message = ConfigError::EmptyPublicKey.to_string();
        assert!(message.contains("Public key cannot be empty"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://nope".to_string(),
        };
        assert!(error.to_string().contains("ftp://nope"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "public_key",
        };
        let message = error.to_string();
        assert!(message.contains("public_key"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptySecretKey;
        let _: &dyn std::error::Error = &error;
    }
}
