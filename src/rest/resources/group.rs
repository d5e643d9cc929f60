//! Group resource implementation.
//!
//! Groups organise the members of a site.

use serde_json::{Map, Value};

use crate::clients::{CloudClient, CloudError};
use crate::rest::{build_path, CloudResource, Deletable, Mutable, ResourceState};

use super::common::{ancestor, objects_from_array};

/// A member group of a site.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    user_id: String,
    site_id: String,
    group_id: String,
    state: ResourceState,
}

impl Group {
    /// URL template for a group.
    pub const PATH: &'static str = "user/{user_id}/site/{site_id}/group/{group_id}";

    /// Creates a group handle that is fetched on first property access.
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        group_id: impl Into<String>,
    ) -> Self {
        Self::with_properties(user_id, site_id, group_id, None)
    }

    /// Fetches a group.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request.
    pub async fn fetch(
        client: &CloudClient,
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        group_id: impl Into<String>,
    ) -> Result<Self, CloudError> {
        let mut group = Self::new(user_id, site_id, group_id);
        group.get(client).await?;
        Ok(group)
    }

    /// Creates a group from properties already known to the caller.
    #[must_use]
    pub fn from_json(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        group_id: impl Into<String>,
        properties: Map<String, Value>,
    ) -> Self {
        Self::with_properties(user_id, site_id, group_id, Some(properties))
    }

    fn with_properties(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        group_id: impl Into<String>,
        properties: Option<Map<String, Value>>,
    ) -> Self {
        let (user_id, site_id, group_id) = (user_id.into(), site_id.into(), group_id.into());
        let url = build_path(
            Self::PATH,
            &[
                ("user_id", &user_id),
                ("site_id", &site_id),
                ("group_id", &group_id),
            ],
        );
        let state = match properties {
            Some(properties) => ResourceState::from_json(url, properties),
            None => ResourceState::new(url),
        };

        Self {
            user_id,
            site_id,
            group_id,
            state,
        }
    }

    /// Returns the group id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.group_id
    }

    /// Returns the id of the owning site.
    #[must_use]
    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    /// Returns the id of the owning user.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Converts a top-level array of groups. `ids` are `[user, site]`.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::UnexpectedResponse`] on any other shape.
    pub fn array_from_json(ids: &[String], json: &Value) -> Result<Vec<Self>, CloudError> {
        let user_id = ancestor(ids, 0, Self::NAME)?;
        let site_id = ancestor(ids, 1, Self::NAME)?;

        objects_from_array(json, "group_id", Self::NAME, |id, properties| {
            Self::from_json(user_id, site_id, id, properties)
        })
    }
}

impl CloudResource for Group {
    const NAME: &'static str = "Group";

    fn state(&self) -> &ResourceState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ResourceState {
        &mut self.state
    }
}

impl Mutable for Group {}

impl Deletable for Group {}
