//! Configuration types for the Weebly Cloud SDK.
//!
//! This module provides the configuration used to build a
//! [`CloudClient`](crate::clients::CloudClient).
//!
//! # Overview
//!
//! - [`CloudConfig`]: credentials plus transport settings
//! - [`CloudConfigBuilder`]: a builder for constructing [`CloudConfig`] instances
//! - [`PublicKey`]: a validated public API key
//! - [`SecretKey`]: a validated API secret with masked debug output
//! - [`BaseUrl`]: a validated API endpoint
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use weebly_cloud::{CloudConfig, PublicKey, SecretKey};
//!
//! let config = CloudConfig::builder()
//!     .public_key(PublicKey::new("my-public-key").unwrap())
//!     .secret_key(SecretKey::new("my-secret").unwrap())
//!     .timeout(Duration::from_secs(5))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(5));
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, PublicKey, SecretKey};

use std::time::Duration;

use crate::error::ConfigError;

/// Default connect and request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Default value of the `X-Client-Type` header.
pub const DEFAULT_CLIENT_TYPE: &str = "rust";

/// Configuration for the Weebly Cloud SDK.
///
/// # Thread Safety
///
/// `CloudConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct CloudConfig {
    public_key: PublicKey,
    secret_key: SecretKey,
    base_url: BaseUrl,
    timeout: Duration,
    client_type: String,
}

impl CloudConfig {
    /// Creates a new builder for constructing a `CloudConfig`.
    #[must_use]
    pub fn builder() -> CloudConfigBuilder {
        CloudConfigBuilder::new()
    }

    /// Returns the public key.
    #[must_use]
    pub const fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Returns the secret key.
    #[must_use]
    pub const fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the connect and request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the value sent as `X-Client-Type`.
    #[must_use]
    pub fn client_type(&self) -> &str {
        &self.client_type
    }
}

// Verify CloudConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CloudConfig>();
};

/// Builder for constructing [`CloudConfig`] instances.
///
/// Required fields are `public_key` and `secret_key`.
///
/// # Defaults
///
/// - `base_url`: `https://api.weeblycloud.com`
/// - `timeout`: 3 seconds
/// - `client_type`: `"rust"`
#[derive(Debug, Default)]
pub struct CloudConfigBuilder {
    public_key: Option<PublicKey>,
    secret_key: Option<SecretKey>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    client_type: Option<String>,
}

impl CloudConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the public key (required).
    #[must_use]
    pub fn public_key(mut self, key: PublicKey) -> Self {
        self.public_key = Some(key);
        self
    }

    /// Sets the secret key (required).
    #[must_use]
    pub fn secret_key(mut self, key: SecretKey) -> Self {
        self.secret_key = Some(key);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the connect and request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the value sent as `X-Client-Type`.
    #[must_use]
    pub fn client_type(mut self, client_type: impl Into<String>) -> Self {
        self.client_type = Some(client_type.into());
        self
    }

    /// Builds the [`CloudConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `public_key` or
    /// `secret_key` are not set.
    pub fn build(self) -> Result<CloudConfig, ConfigError> {
        let public_key = self.public_key.ok_or(ConfigError::MissingRequiredField {
            field: "public_key",
        })?;
        let secret_key = self.secret_key.ok_or(ConfigError::MissingRequiredField {
            field: "secret_key",
        })?;

        Ok(CloudConfig {
            public_key,
            secret_key,
            base_url: self.base_url.unwrap_or_default(),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            client_type: self
                .client_type
                .unwrap_or_else(|| DEFAULT_CLIENT_TYPE.to_string()),
        })
    }
}
