//! Resource traits for lazy, diff-tracked remote entities.
//!
//! This module defines the capabilities a Weebly Cloud entity can have:
//!
//! - [`CloudResource`]: readable. Every entity implements it and gains
//!   `get()`, `property()` and friends.
//! - [`Mutable`]: staged edits that are saved as a PATCH of the changed fields.
//! - [`Deletable`]: removal of the server-side entity.
//!
//! Capabilities are composed per entity type; a read-only entity implements
//! only [`CloudResource`].
//!
//! # Implementing a Resource
//!
//! To implement a resource:
//!
//! 1. Define a struct holding a [`ResourceState`]
//! 2. Implement [`CloudResource`], overriding `properties_from_json` if the
//!    API wraps the entity in an envelope object
//! 3. Opt into [`Mutable`] and [`Deletable`] with empty impl blocks
//!
//! # Example
//!
//! ```rust,ignore
//! use weebly_cloud::rest::{CloudResource, Mutable, ResourceState};
//!
//! pub struct Widget {
//!     state: ResourceState,
//! }
//!
//! impl CloudResource for Widget {
//!     const NAME: &'static str = "Widget";
//!
//!     fn state(&self) -> &ResourceState {
//!         &self.state
//!     }
//!
//!     fn state_mut(&mut self) -> &mut ResourceState {
//!         &mut self.state
//!     }
//! }
//!
//! impl Mutable for Widget {}
//!
//! // Usage:
//! let mut widget = Widget { state: ResourceState::new("widget/1") };
//! let name = widget.property(&client, "name").await?;  // fetches once
//! widget.set_property("name", json!("renamed"));
//! widget.save(&client).await?;                          // PATCH {"name":"renamed"}
//! ```

use serde_json::{Map, Value};

use crate::clients::{CloudClient, CloudError, Params};
use crate::rest::ResourceState;

/// A remote entity that can be read.
///
/// Implementors only expose their [`ResourceState`]; every operation has a
/// default implementation in terms of it.
///
/// # Lazy Hydration
///
/// A resource is hydrated at most once on demand: [`property`](Self::property)
/// fetches only when the resource has not been fully fetched and the name is
/// not already cached. [`get`](Self::get) always refetches.
#[allow(async_fn_in_trait)]
pub trait CloudResource: Sized {
    /// The entity name, used in error messages.
    const NAME: &'static str;

    /// Returns the resource state.
    fn state(&self) -> &ResourceState;

    /// Returns the resource state for mutation.
    fn state_mut(&mut self) -> &mut ResourceState;

    /// Returns the resource URL, relative to the API base URL.
    fn url(&self) -> &str {
        self.state().url()
    }

    /// Extracts the property map from a response body for this resource.
    ///
    /// The default requires the body to be a JSON object and uses it as is.
    /// Entities that the API wraps in an envelope override this.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::UnexpectedResponse`] if the body has the wrong shape.
    fn properties_from_json(&self, body: Value) -> Result<Map<String, Value>, CloudError> {
        match body {
            Value::Object(map) => Ok(map),
            other => Err(CloudError::unexpected(format!(
                "expected {} object, got {other}",
                Self::NAME
            ))),
        }
    }

    /// Fetches the resource and replaces the cached properties.
    ///
    /// Staged edits are kept. On failure the cache is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::ResourceDeleted`] if the resource was deleted
    /// through this handle, or any error raised by the request.
    async fn get(&mut self, client: &CloudClient) -> Result<(), CloudError> {
        self.state().ensure_live()?;

        let response = client.get(self.url()).await?;
        let properties = self.properties_from_json(response.body)?;
        self.state_mut().hydrate(properties);
        Ok(())
    }

    /// Returns a property, fetching the resource first if it is not cached.
    ///
    /// Staged edits are never returned; reads only see server data.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::ResourceDeleted`] if the resource was deleted
    /// through this handle, or any error raised by the fetch.
    async fn property(
        &mut self,
        client: &CloudClient,
        name: &str,
    ) -> Result<Option<&Value>, CloudError> {
        self.state().ensure_live()?;

        if self.state().needs_fetch(name) {
            self.get(client).await?;
        }
        Ok(self.state().properties().get(name))
    }

    /// Returns a cached property without touching the network.
    fn cached_property(&self, name: &str) -> Option<&Value> {
        self.state().properties().get(name)
    }

    /// Returns all cached properties.
    fn properties(&self) -> &Map<String, Value> {
        self.state().properties()
    }

    /// Returns the cached properties as a JSON object.
    fn to_json(&self) -> Value {
        Value::Object(self.state().properties().clone())
    }
}

/// A remote entity whose properties can be edited and saved.
#[allow(async_fn_in_trait)]
pub trait Mutable: CloudResource {
    /// Stages a property edit. Nothing is sent until [`save`](Self::save).
    fn set_property(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.state_mut().stage(name, value.into());
    }

    /// Returns the edits staged since the last successful save.
    fn changed(&self) -> &Params {
        self.state().changed()
    }

    /// Returns `true` if any edits are staged.
    fn has_changes(&self) -> bool {
        self.state().has_changes()
    }

    /// Sends the staged edits as a PATCH and clears them on success.
    ///
    /// With nothing staged, no request is sent. On failure the staged edits
    /// are kept so the save can be retried. The cached properties are not
    /// updated; call [`get`](CloudResource::get) to see the saved values.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::ResourceDeleted`] if the resource was deleted
    /// through this handle, or any error raised by the request.
    async fn save(&mut self, client: &CloudClient) -> Result<(), CloudError> {
        self.state().ensure_live()?;

        if !self.has_changes() {
            tracing::debug!(resource = Self::NAME, url = %self.url(), "No staged edits, skipping save");
            return Ok(());
        }

        client
            .patch(self.url(), self.state().changed().clone())
            .await?;
        self.state_mut().clear_changes();
        Ok(())
    }
}

/// A remote entity that can be deleted.
#[allow(async_fn_in_trait)]
pub trait Deletable: CloudResource {
    /// Deletes the server-side entity.
    ///
    /// Once the server confirms, this handle is marked deleted: further
    /// `get`, `property`, `save` and `delete` calls fail with
    /// [`CloudError::ResourceDeleted`] without a request. Cached properties
    /// stay readable through [`cached_property`](CloudResource::cached_property).
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::ResourceDeleted`] if already deleted, or any
    /// error raised by the request.
    async fn delete(&mut self, client: &CloudClient) -> Result<(), CloudError> {
        self.state().ensure_live()?;

        client.delete(self.url()).await?;
        self.state_mut().mark_deleted();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Widget {
        state: ResourceState,
    }

    impl CloudResource for Widget {
        const NAME: &'static str = "Widget";

        fn state(&self) -> &ResourceState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut ResourceState {
            &mut self.state
        }
    }

    impl Mutable for Widget {}
    impl Deletable for Widget {}

    fn widget(props: Value) -> Widget {
        let Value::Object(map) = props else {
            panic!("expected object")
        };
        Widget {
            state: ResourceState::from_json("widget/1", map),
        }
    }

    #[test]
    fn test_default_properties_from_json_requires_object() {
        let w = widget(json!({}));
        assert!(w.properties_from_json(json!({"a": 1})).is_ok());
        assert!(matches!(
            w.properties_from_json(json!([1, 2])),
            Err(CloudError::UnexpectedResponse { .. })
        ));
    }

    #[test]
    fn test_cached_reads_and_json() {
        let w = widget(json!({"name": "a", "size": 3}));
        assert_eq!(w.url(), "widget/1");
        assert_eq!(w.cached_property("name"), Some(&json!("a")));
        assert_eq!(w.cached_property("missing"), None);
        assert_eq!(w.properties().len(), 2);
        assert_eq!(w.to_json(), json!({"name": "a", "size": 3}));
    }

    #[test]
    fn test_set_property_is_write_only() {
        let mut w = widget(json!({"name": "a"}));
        w.set_property("name", "b");
        w.set_property("size", 4);

        assert_eq!(w.cached_property("name"), Some(&json!("a")));
        assert!(w.has_changes());
        assert_eq!(w.changed().get("name"), Some(&json!("b")));
        assert_eq!(w.changed().get("size"), Some(&json!(4)));
    }

    #[test]
    fn test_save_without_changes_sends_nothing() {
        let client = CloudClient::configure("public", "secret").unwrap();
        let mut w = widget(json!({"name": "a"}));

        // No request is made, so no server is needed.
        tokio_test::block_on(async {
            assert!(w.save(&client).await.is_ok());
        });
    }

    #[test]
    fn test_deleted_resource_fails_fast() {
        let client = CloudClient::configure("public", "secret").unwrap();
        let mut w = widget(json!({"name": "a"}));
        w.state_mut().mark_deleted();
        w.set_property("name", "b");

        tokio_test::block_on(async {
            assert!(matches!(w.get(&client).await, Err(CloudError::ResourceDeleted { .. })));
            assert!(matches!(
                w.property(&client, "other").await,
                Err(CloudError::ResourceDeleted { .. })
            ));
            assert!(matches!(w.save(&client).await, Err(CloudError::ResourceDeleted { .. })));
            assert!(matches!(w.delete(&client).await, Err(CloudError::ResourceDeleted { .. })));
        });

        assert_eq!(w.cached_property("name"), Some(&json!("a")));
        assert!(w.has_changes());
    }
}
