//! Page resource implementation.
//!
//! Pages are the navigable pages of a site. They can be edited (for example
//! renamed) but not deleted through the API.
//!
//! # Example
//!
//! ```rust,ignore
//! use weebly_cloud::rest::Mutable;
//!
//! let mut pages = site.list_pages(&client, Params::new()).await?;
//! let mut cursor = pages.cursor();
//! while let Some(page) = cursor.try_next().await? {
//!     page.set_property("title", "Renamed");
//!     page.save(&client).await?;
//! }
//! ```

use serde_json::{Map, Value};

use crate::clients::{CloudClient, CloudError};
use crate::rest::{build_path, CloudResource, Mutable, ResourceState};

use super::common::{ancestor, objects_from_array};

/// A page of a site.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    user_id: String,
    site_id: String,
    page_id: String,
    state: ResourceState,
}

impl Page {
    /// URL template for a page.
    pub const PATH: &'static str = "user/{user_id}/site/{site_id}/page/{page_id}";

    /// Creates a page handle that is fetched on first property access.
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        page_id: impl Into<String>,
    ) -> Self {
        Self::with_properties(user_id, site_id, page_id, None)
    }

    /// Fetches a page.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request.
    pub async fn fetch(
        client: &CloudClient,
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        page_id: impl Into<String>,
    ) -> Result<Self, CloudError> {
        let mut page = Self::new(user_id, site_id, page_id);
        page.get(client).await?;
        Ok(page)
    }

    /// Creates a page from properties already known to the caller.
    #[must_use]
    pub fn from_json(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        page_id: impl Into<String>,
        properties: Map<String, Value>,
    ) -> Self {
        Self::with_properties(user_id, site_id, page_id, Some(properties))
    }

    fn with_properties(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        page_id: impl Into<String>,
        properties: Option<Map<String, Value>>,
    ) -> Self {
        let (user_id, site_id, page_id) = (user_id.into(), site_id.into(), page_id.into());
        let url = build_path(
            Self::PATH,
            &[
                ("user_id", &user_id),
                ("site_id", &site_id),
                ("page_id", &page_id),
            ],
        );
        let state = match properties {
            Some(properties) => ResourceState::from_json(url, properties),
            None => ResourceState::new(url),
        };

        Self {
            user_id,
            site_id,
            page_id,
            state,
        }
    }

    /// Returns the page id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.page_id
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

    /// Converts a top-level array of pages. `ids` are `[user, site]`.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::UnexpectedResponse`] if the body is not an array
    /// of pages with `page_id` fields.
    pub fn array_from_json(ids: &[String], json: &Value) -> Result<Vec<Self>, CloudError> {
        let user_id = ancestor(ids, 0, Self::NAME)?;
        let site_id = ancestor(ids, 1, Self::NAME)?;

        objects_from_array(json, "page_id", Self::NAME, |id, properties| {
            Self::from_json(user_id, site_id, id, properties)
        })
    }
}

impl CloudResource for Page {
    const NAME: &'static str = "Page";

    fn state(&self) -> &ResourceState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ResourceState {
        &mut self.state
    }
}

impl Mutable for Page {}
