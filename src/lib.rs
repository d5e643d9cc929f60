//! # Weebly Cloud Rust SDK
//!
//! A Rust client for the Weebly Cloud API, the reseller API used to
//! provision users and sites, publish sites and manage their content.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`CloudConfig`] and [`CloudConfigBuilder`]
//! - Validated newtypes for API credentials and the endpoint
//! - HMAC-SHA256 request signing
//! - An async HTTP client that decodes the API's error envelope
//! - `X-Resultset` pagination with transparent page-by-page lists
//! - Lazily fetched, diff-tracked entities for every API resource
//!
//! ## Quick Start
//!
//! ```rust
//! use weebly_cloud::CloudClient;
//!
//! let client = CloudClient::configure("your-public-key", "your-secret").unwrap();
//! assert_eq!(client.config().base_url().as_ref(), "https://api.weeblycloud.com");
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use std::time::Duration;
//! use weebly_cloud::{BaseUrl, CloudClient, CloudConfig, PublicKey, SecretKey};
//!
//! let config = CloudConfig::builder()
//!     .public_key(PublicKey::new("your-public-key").unwrap())
//!     .secret_key(SecretKey::new("your-secret").unwrap())
//!     .base_url(BaseUrl::new("https://api.weeblycloud.com/").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! let client = CloudClient::new(config).unwrap();
//! ```
//!
//! ## Working With Entities
//!
//! ```rust,ignore
//! use weebly_cloud::{Account, CloudClient, CloudResource, Mutable, Params};
//!
//! let client = CloudClient::configure("your-public-key", "your-secret")?;
//!
//! // Create a user and a site; both come back hydrated
//! let user = Account::new()
//!     .create_user(&client, "owner@example.com", Params::new())
//!     .await?;
//! let mut site = user.create_site(&client, "example.com", Params::new()).await?;
//!
//! // Stage an edit and send it as a PATCH
//! site.set_property("site_title", "My Site");
//! site.save(&client).await?;
//!
//! // Walk every page of a paginated list
//! let mut pages = site.list_pages(&client, Params::new()).await?;
//! let mut cursor = pages.cursor();
//! while let Some(page) = cursor.try_next().await? {
//!     println!("{:?}", page.cached_property("title"));
//! }
//! ```
//!
//! ## Raw Requests
//!
//! Endpoints without an entity wrapper can be called directly:
//!
//! ```rust,ignore
//! let response = client.get("user/42/site/7/page").await?;
//! if response.is_paginated() {
//!     let next = response.next_page(&client).await?;
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the client is built from a [`CloudConfig`] and passed explicitly
//! - **Fail-fast validation**: credentials are validated on construction
//! - **Thread-safe**: [`CloudClient`] is `Clone + Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, CloudConfig, CloudConfigBuilder, PublicKey, SecretKey};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{CloudClient, CloudError, CloudResponse, HttpMethod, Pagination, Params};

// Re-export the resource layer
pub use rest::resources::{
    Account, Blog, BlogPost, Form, FormEntry, Group, Member, Page, Plan, Site, User,
};
pub use rest::{CloudResource, Deletable, ListCursor, Mutable, ResourceList};
