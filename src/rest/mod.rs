//! Resource infrastructure for the Weebly Cloud API.
//!
//! This module provides the foundation every entity is built on:
//!
//! - **[`CloudResource`] trait**: lazy, cached reads of a remote entity
//! - **[`Mutable`] and [`Deletable`] traits**: opt-in edit and delete capabilities
//! - **[`ResourceState`]**: cached properties, staged edits and hydration level
//! - **[`ResourceList<T>`]**: a list that fetches further pages on demand
//! - **Path building**: percent-encoded URL templates for nested resources
//!
//! # Overview
//!
//! This module is entity-agnostic. Individual entities (User, Site, Blog,
//! etc.) are implemented in the `resources` submodule and supply only their
//! URL template, unwrap rule and list conversion.
//!
//! # Example: Using a Resource
//!
//! ```rust,ignore
//! use weebly_cloud::CloudClient;
//! use weebly_cloud::rest::{CloudResource, Deletable, Mutable};
//! use weebly_cloud::rest::resources::Site;
//!
//! let client = CloudClient::configure("public-key", "secret")?;
//!
//! // Nothing is fetched until a property is read
//! let mut site = Site::new("42", "7");
//! let domain = site.property(&client, "domain").await?.cloned();
//!
//! // Edits are staged locally and sent as one PATCH
//! site.set_property("site_title", "Hello");
//! site.save(&client).await?;
//!
//! // Delete the site; this handle can no longer be used for requests
//! site.delete(&client).await?;
//! ```
//!
//! # Key Types
//!
//! - [`CloudResource`], [`Mutable`], [`Deletable`]: capability traits
//! - [`ResourceState`] and [`Hydration`]: per-resource state
//! - [`ResourceList`] and [`ListCursor`]: pagination-transparent lists
//! - [`resources`]: the concrete entities

mod list;
mod path;
mod resource;
mod state;

pub mod resources;

// Public exports
pub use list::{ConvertFn, ListCursor, ResourceList};
pub use path::{build_path, id_from_json};
pub use resource::{CloudResource, Deletable, Mutable};
pub use state::{Hydration, ResourceState};
