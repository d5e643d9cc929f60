//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Weebly Cloud public API key.
///
/// Sent verbatim in the `X-Public-Key` header of every request.
///
/// # Example
///
/// ```rust
/// use weebly_cloud::PublicKey;
///
/// let key = PublicKey::new("my-public-key").unwrap();
/// assert_eq!(key.as_ref(), "my-public-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(String);

impl PublicKey {
    /// Creates a new validated public key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPublicKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyPublicKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for PublicKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Weebly Cloud API secret.
///
/// The secret never leaves the process: it is only used as the HMAC key when
/// signing requests.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `SecretKey(*****)` instead of the actual key.
///
/// ```rust
/// use weebly_cloud::SecretKey;
///
/// let secret = SecretKey::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "SecretKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    /// Creates a new validated secret key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySecretKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptySecretKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for SecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(*****)")
    }
}

/// A validated API base URL.
///
/// Only `http` and `https` schemes are accepted. Trailing slashes are
/// trimmed so that paths can be joined with a single `/`.
///
/// # Example
///
/// ```rust
/// use weebly_cloud::BaseUrl;
///
/// let url = BaseUrl::new("https://api.weeblycloud.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.weeblycloud.com");
/// assert_eq!(url.join("user/42"), "https://api.weeblycloud.com/user/42");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// The production Weebly Cloud API endpoint.
    pub const DEFAULT: &'static str = "https://api.weeblycloud.com";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = url[..scheme_end].to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host_start = scheme_end + 3;
        let host_end = url[host_start..]
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(url))
    }

    /// Joins a relative API path onto this base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_key_rejects_empty_string() {
        assert!(matches!(PublicKey::new(""), Err(ConfigError::EmptyPublicKey)));
    }

    #[test]
    fn test_secret_key_rejects_empty_string() {
        assert!(matches!(SecretKey::new(""), Err(ConfigError::EmptySecretKey)));
    }

    #[test]
    fn test_secret_key_masks_value_in_debug() {
        let secret = SecretKey::new("super-secret-key").unwrap();
        let debug_output = format!("{secret:?}");
        assert_eq!(debug_output, "SecretKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_base_url_default_points_at_production() {
        let url = BaseUrl::default();
        assert_eq!(url.as_ref(), "https://api.weeblycloud.com");
        assert_eq!(url, BaseUrl::new(BaseUrl::DEFAULT).unwrap());
    }

    #[test]
    fn test_base_url_trims_trailing_slash_and_joins() {
        let url = BaseUrl::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
        assert_eq!(url.join("user/42"), "http://127.0.0.1:8080/user/42");
        assert_eq!(url.join("/account"), "http://127.0.0.1:8080/account");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("api.weeblycloud.com").is_err());
        assert!(BaseUrl::new("ftp://api.weeblycloud.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("https://:8080").is_err());
        assert!(BaseUrl::new("https:///user").is_err());
    }
}
