//! HTTP client for Weebly Cloud API communication.
//!
//! This module provides the [`CloudClient`] type for making signed requests
//! to the Weebly Cloud API.

use std::collections::HashMap;

use crate::clients::errors::CloudError;
use crate::clients::http_request::{CloudRequest, HttpMethod, Params};
use crate::clients::http_response::CloudResponse;
use crate::clients::signing;
use crate::config::{CloudConfig, PublicKey, SecretKey};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Weebly Cloud API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Request signing with the API secret
/// - Default headers (public key, content type, client identification)
/// - The connect and request timeout
///
/// The client never retries. A request that exceeds the timeout fails with
/// [`CloudError::RequestTimeout`].
///
/// # Thread Safety
///
/// `CloudClient` is `Clone`, `Send` and `Sync`. Clones share one connection
/// pool, so cloning is cheap.
///
/// # Example
///
/// ```rust,ignore
/// use weebly_cloud::CloudClient;
///
/// let client = CloudClient::configure("public-key", "secret")?;
/// let response = client.get("account").await?;
/// println!("{}", response.body);
/// ```
#[derive(Clone, Debug)]
pub struct CloudClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Credentials and transport settings.
    config: CloudConfig,
}

// Verify CloudClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CloudClient>();
};

impl CloudClient {
    /// Creates a new client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the underlying HTTP client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: CloudConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .connect_timeout(config.timeout())
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::TransportInit {
                reason: e.to_string(),
            })?;

        Ok(Self { client, config })
    }

    /// Creates a client from a public key and secret with default settings.
    ///
    /// Replacing credentials means building a new client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPublicKey`] or [`ConfigError::EmptySecretKey`]
    /// for empty credentials, or [`ConfigError::TransportInit`] if the HTTP
    /// client cannot be created.
    ///
    /// # Example
    ///
    /// ```rust
    /// use weebly_cloud::CloudClient;
    ///
    /// let client = CloudClient::configure("public-key", "secret").unwrap();
    /// assert_eq!(client.config().public_key().as_ref(), "public-key");
    ///
    /// assert!(CloudClient::configure("", "secret").is_err());
    /// ```
    pub fn configure(
        public_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = CloudConfig::builder()
            .public_key(PublicKey::new(public_key)?)
            .secret_key(SecretKey::new(secret_key)?)
            .build()?;
        Self::new(config)
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &CloudConfig {
        &self.config
    }

    /// Sends a signed request to the Weebly Cloud API.
    ///
    /// `path` is relative to the base URL (e.g. `"user/42/site"`); a leading
    /// slash is ignored. Parameters are sent as a JSON body for POST, PUT and
    /// PATCH and as a query string for GET and DELETE.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError`] if:
    /// - The request times out (`RequestTimeout`)
    /// - A network error occurs (`Network`)
    /// - The body carries an `error` object (`Api`)
    /// - The status is 400 or above (`Status`)
    /// - A successful body is not JSON (`Decode`)
    pub async fn request(
        &self,
        path: &str,
        method: HttpMethod,
        params: Params,
    ) -> Result<CloudResponse, CloudError> {
        let request = CloudRequest::new(method, path.trim_start_matches('/'), params);
        self.send(request).await
    }

    /// Sends a prepared [`CloudRequest`].
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn send(&self, request: CloudRequest) -> Result<CloudResponse, CloudError> {
        let body = request.body();
        let signature = signing::sign(
            self.config.secret_key().as_ref(),
            request.method.as_str(),
            &request.path,
            &body,
        )?;

        let url = self.config.base_url().join(&request.path);

        let mut req_builder = self
            .client
            .request(request.method.into(), &url)
            .header("X-Public-Key", self.config.public_key().as_ref())
            .header("X-Signed-Request-Hash", signature)
            .header("Content-Type", "application/json")
            .header("X-Client-Type", self.config.client_type())
            .header("X-Client-Version", SDK_VERSION);

        if request.method.carries_body() {
            req_builder = req_builder.body(body);
        } else if !request.params.is_empty() {
            req_builder = req_builder.query(&request.query_pairs());
        }

        tracing::debug!(method = %request.method, path = %request.path, "Sending Weebly Cloud request");

        let res = req_builder.send().await?;

        let status = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let response = CloudResponse::new(status, request.path, request.params, &headers, &body_text);

        match &response {
            Ok(r) => tracing::debug!(
                status,
                path = %r.path,
                pagination = ?r.pagination,
                "Received Weebly Cloud response"
            ),
            Err(e) => tracing::debug!(status, error = %e, "Weebly Cloud request failed"),
        }

        response
    }

    /// Sends a GET request without parameters.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn get(&self, path: &str) -> Result<CloudResponse, CloudError> {
        self.request(path, HttpMethod::Get, Params::new()).await
    }

    /// Sends a GET request with query parameters.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn get_with(&self, path: &str, params: Params) -> Result<CloudResponse, CloudError> {
        self.request(path, HttpMethod::Get, params).await
    }

    /// Sends a POST request with an empty JSON object body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn post(&self, path: &str) -> Result<CloudResponse, CloudError> {
        self.request(path, HttpMethod::Post, Params::new()).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn post_with(&self, path: &str, data: Params) -> Result<CloudResponse, CloudError> {
        self.request(path, HttpMethod::Post, data).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn put(&self, path: &str, data: Params) -> Result<CloudResponse, CloudError> {
        self.request(path, HttpMethod::Put, data).await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn patch(&self, path: &str, data: Params) -> Result<CloudResponse, CloudError> {
        self.request(path, HttpMethod::Patch, data).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn delete(&self, path: &str) -> Result<CloudResponse, CloudError> {
        self.request(path, HttpMethod::Delete, Params::new()).await
    }

    /// Parses response headers into a `HashMap` keyed by lower-cased name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaseUrl;
    use std::time::Duration;

    #[test]
    fn test_configure_builds_default_client() {
        let client = CloudClient::configure("public", "secret").unwrap();
        assert_eq!(client.config().public_key().as_ref(), "public");
        assert_eq!(client.config().base_url().as_ref(), BaseUrl::DEFAULT);
        assert_eq!(client.config().timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_configure_rejects_empty_credentials() {
        assert!(matches!(
            CloudClient::configure("", "secret"),
            Err(ConfigError::EmptyPublicKey)
        ));
        assert!(matches!(
            CloudClient::configure("public", ""),
            Err(ConfigError::EmptySecretKey)
        ));
    }

    #[test]
    fn test_client_debug_does_not_leak_secret() {
        let client = CloudClient::configure("public", "hunter2").unwrap();
        assert!(!format!("{client:?}").contains("hunter2"));
    }

    #[test]
    fn test_parse_response_headers_lowercases_names() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("X-Resultset-Page", "2".parse().unwrap());
        headers.append("Set-Cookie", "a=1".parse().unwrap());
        headers.append("Set-Cookie", "b=2".parse().unwrap());

        let parsed = CloudClient::parse_response_headers(&headers);
        assert_eq!(parsed.get("x-resultset-page"), Some(&vec!["2".to_string()]));
        assert_eq!(parsed.get("set-cookie").map(Vec::len), Some(2));
    }

    #[test]
    fn test_sdk_version_is_crate_version() {
        assert_eq!(SDK_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
