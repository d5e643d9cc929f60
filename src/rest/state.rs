//! Cached properties and staged edits for a resource.
//!
//! This module provides [`ResourceState`], the data every resource carries:
//! its URL, the properties last received from the server, the edits staged
//! locally since the last save, and how far the cache has been hydrated.
//!
//! # How It Works
//!
//! Reads only ever see server data. Writes go to a separate `changed` bag
//! that is sent as a PATCH on save and cleared once the server accepts it.
//! A staged edit therefore becomes visible to reads only after a save and a
//! refresh have round-tripped through the server.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use weebly_cloud::rest::{Hydration, ResourceState};
//!
//! let mut props = serde_json::Map::new();
//! props.insert("name".to_string(), json!("old"));
//!
//! let mut state = ResourceState::from_json("user/1", props);
//! assert_eq!(state.hydration(), Hydration::Partial);
//!
//! state.stage("name", json!("new"));
//! assert_eq!(state.properties().get("name"), Some(&json!("old")));
//! assert!(state.has_changes());
//! ```

use serde_json::{Map, Value};

use crate::clients::CloudError;

/// How much of a resource's server state is cached locally.
///
/// A resource moves to `Full` only when a fetch succeeds; there is no
/// transition back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hydration {
    /// Nothing has been loaded yet.
    Uninitialized,
    /// Loaded from a JSON fragment (a list or create response), possibly incomplete.
    Partial,
    /// Loaded from a fetch of the resource itself.
    Full,
}

/// The locally held state of one remote resource.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceState {
    url: String,
    properties: Map<String, Value>,
    changed: Map<String, Value>,
    hydration: Hydration,
    deleted: bool,
}

impl ResourceState {
    /// Creates an empty state to be hydrated on first access.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            properties: Map::new(),
            changed: Map::new(),
            hydration: Hydration::Uninitialized,
            deleted: false,
        }
    }

    /// Creates a state seeded from a JSON fragment already known to the caller.
    #[must_use]
    pub fn from_json(url: impl Into<String>, properties: Map<String, Value>) -> Self {
        Self {
            properties,
            hydration: Hydration::Partial,
            ..Self::new(url)
        }
    }

    /// Returns the resource URL, relative to the API base URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the cached server properties.
    #[must_use]
    pub const fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Returns the edits staged since the last successful save.
    #[must_use]
    pub const fn changed(&self) -> &Map<String, Value> {
        &self.changed
    }

    /// Returns `true` if any edits are staged.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.changed.is_empty()
    }

    /// Returns the current hydration level.
    #[must_use]
    pub const fn hydration(&self) -> Hydration {
        self.hydration
    }

    /// Returns `true` once the resource has been deleted through this handle.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Returns `true` if reading `name` would require a fetch.
    #[must_use]
    pub fn needs_fetch(&self, name: &str) -> bool {
        self.hydration != Hydration::Full && !self.properties.contains_key(name)
    }

    /// Replaces the cached properties with a full server representation.
    pub fn hydrate(&mut self, properties: Map<String, Value>) {
        self.properties = properties;
        self.hydration = Hydration::Full;
    }

    /// Stages a local edit. The cached properties are not touched.
    pub fn stage(&mut self, name: impl Into<String>, value: Value) {
        self.changed.insert(name.into(), value);
    }

    /// Discards all staged edits.
    pub fn clear_changes(&mut self) {
        self.changed.clear();
    }

    /// Marks the resource as deleted.
    pub fn mark_deleted(&mut self) {
        self.deleted = true;
    }

    /// Fails with [`CloudError::ResourceDeleted`] if the resource was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::ResourceDeleted`] after [`mark_deleted`](Self::mark_deleted).
    pub fn ensure_live(&self) -> Result<(), CloudError> {
        if self.deleted {
            return Err(CloudError::ResourceDeleted {
                url: self.url.clone(),
            });
        }
        Ok(())
    }
}

// Verify ResourceState is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceState>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_new_state_is_uninitialized_and_clean() {
        let state = ResourceState::new("account");
        assert_eq!(state.url(), "account");
        assert_eq!(state.hydration(), Hydration::Uninitialized);
        assert!(state.properties().is_empty());
        assert!(!state.has_changes());
        assert!(!state.is_deleted());
    }

    #[test]
    fn test_fragment_state_is_partial() {
        let state = ResourceState::from_json("user/1", props(json!({"email": "a@b.c"})));
        assert_eq!(state.hydration(), Hydration::Partial);
        assert!(!state.needs_fetch("email"));
        assert!(state.needs_fetch("language"));
    }

    #[test]
    fn test_full_state_never_needs_fetch() {
        let mut state = ResourceState::new("user/1");
        assert!(state.needs_fetch("email"));

        state.hydrate(props(json!({"email": "a@b.c"})));
        assert_eq!(state.hydration(), Hydration::Full);
        assert!(!state.needs_fetch("email"));
        assert!(!state.needs_fetch("missing"));
    }

    #[test]
    fn test_staged_edits_do_not_touch_cache() {
        let mut state = ResourceState::from_json("user/1", props(json!({"email": "old"})));
        state.stage("email", json!("new"));

        assert_eq!(state.properties().get("email"), Some(&json!("old")));
        assert_eq!(state.changed().get("email"), Some(&json!("new")));

        state.clear_changes();
        assert!(!state.has_changes());
    }

    #[test]
    fn test_hydrate_keeps_staged_edits() {
        let mut state = ResourceState::new("user/1");
        state.stage("email", json!("new"));
        state.hydrate(props(json!({"email": "server"})));

        assert_eq!(state.properties().get("email"), Some(&json!("server")));
        assert!(state.has_changes());
    }

    #[test]
    fn test_deleted_state_fails_fast() {
        let mut state = ResourceState::new("user/1/site/2");
        assert!(state.ensure_live().is_ok());

        state.mark_deleted();
        match state.ensure_live() {
            Err(CloudError::ResourceDeleted { url }) => assert_eq!(url, "user/1/site/2"),
            other => panic!("expected ResourceDeleted, got {other:?}"),
        }
    }
}
