//! Form entry resource implementation.
//!
//! A form entry is one submission of a site form. Entries are read-only.

use serde_json::{Map, Value};

use crate::clients::{CloudClient, CloudError};
use crate::rest::{build_path, CloudResource, ResourceState};

use super::common::{ancestor, objects_from_array};

/// One submission of a form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormEntry {
    user_id: String,
    site_id: String,
    form_id: String,
    form_entry_id: String,
    state: ResourceState,
}

impl FormEntry {
    /// URL template for a form entry.
    pub const PATH: &'static str =
        "user/{user_id}/site/{site_id}/form/{form_id}/entry/{form_entry_id}";

    /// Creates a form entry handle that is fetched on first property access.
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        form_id: impl Into<String>,
        form_entry_id: impl Into<String>,
    ) -> Self {
        Self::with_properties(user_id, site_id, form_id, form_entry_id, None)
    }

    /// Fetches a form entry.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request.
    pub async fn fetch(
        client: &CloudClient,
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        form_id: impl Into<String>,
        form_entry_id: impl Into<String>,
    ) -> Result<Self, CloudError> {
        let mut entry = Self::new(user_id, site_id, form_id, form_entry_id);
        entry.get(client).await?;
        Ok(entry)
    }

    /// Creates a form entry from properties already known to the caller.
    #[must_use]
    pub fn from_json(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        form_id: impl Into<String>,
        form_entry_id: impl Into<String>,
        properties: Map<String, Value>,
    ) -> Self {
        Self::with_properties(user_id, site_id, form_id, form_entry_id, Some(properties))
    }

    fn with_properties(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        form_id: impl Into<String>,
        form_entry_id: impl Into<String>,
        properties: Option<Map<String, Value>>,
    ) -> Self {
        let (user_id, site_id, form_id, form_entry_id) = (
            user_id.into(),
            site_id.into(),
            form_id.into(),
            form_entry_id.into(),
        );
        let url = build_path(
            Self::PATH,
            &[
                ("user_id", &user_id),
                ("site_id", &site_id),
                ("form_id", &form_id),
                ("form_entry_id", &form_entry_id),
            ],
        );
        let state = match properties {
            Some(properties) => ResourceState::from_json(url, properties),
            None => ResourceState::new(url),
        };

        Self {
            user_id,
            site_id,
            form_id,
            form_entry_id,
            state,
        }
    }

    /// Returns the form entry id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.form_entry_id
    }

    /// Returns the id of the form this entry belongs to.
    #[must_use]
    pub fn form_id(&self) -> &str {
        &self.form_id
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

    /// Converts a top-level array of entries. `ids` are `[user, site, form]`.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::UnexpectedResponse`] if the body is not an array
    /// of entries with `form_entry_id` fields.
    pub fn array_from_json(ids: &[String], json: &Value) -> Result<Vec<Self>, CloudError> {
        let user_id = ancestor(ids, 0, Self::NAME)?;
        let site_id = ancestor(ids, 1, Self::NAME)?;
        let form_id = ancestor(ids, 2, Self::NAME)?;

        objects_from_array(json, "form_entry_id", Self::NAME, |id, properties| {
            Self::from_json(user_id, site_id, form_id, id, properties)
        })
    }
}

impl CloudResource for FormEntry {
    const NAME: &'static str = "FormEntry";

    fn state(&self) -> &ResourceState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ResourceState {
        &mut self.state
    }
}
