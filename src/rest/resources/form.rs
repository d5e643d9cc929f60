//! Form resource implementation.
//!
//! Forms are read-only; their submissions are exposed as [`FormEntry`] lists.
//!
//! # Example
//!
//! ```rust,ignore
//! use weebly_cloud::rest::resources::Form;
//!
//! let form = Form::new("42", "7", "9");
//! let entries = form.list_entries(&client, Params::new()).await?.collect_all().await?;
//! ```

use serde_json::{Map, Value};

use crate::clients::{CloudClient, CloudError, Params};
use crate::rest::{build_path, CloudResource, ResourceList, ResourceState};

use super::common::{ancestor, objects_from_array};
use super::FormEntry;

/// A form on a site.
#[derive(Clone, Debug, PartialEq)]
pub struct Form {
    user_id: String,
    site_id: String,
    form_id: String,
    state: ResourceState,
}

impl Form {
    /// URL template for a form.
    pub const PATH: &'static str = "user/{user_id}/site/{site_id}/form/{form_id}";

    /// Creates a form handle that is fetched on first property access.
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        form_id: impl Into<String>,
    ) -> Self {
        Self::with_properties(user_id, site_id, form_id, None)
    }

    /// Fetches a form.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request.
    pub async fn fetch(
        client: &CloudClient,
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        form_id: impl Into<String>,
    ) -> Result<Self, CloudError> {
        let mut form = Self::new(user_id, site_id, form_id);
        form.get(client).await?;
        Ok(form)
    }

    /// Creates a form from properties already known to the caller.
    #[must_use]
    pub fn from_json(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        form_id: impl Into<String>,
        properties: Map<String, Value>,
    ) -> Self {
        Self::with_properties(user_id, site_id, form_id, Some(properties))
    }

    fn with_properties(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        form_id: impl Into<String>,
        properties: Option<Map<String, Value>>,
    ) -> Self {
        let (user_id, site_id, form_id) = (user_id.into(), site_id.into(), form_id.into());
        let url = build_path(
            Self::PATH,
            &[
                ("user_id", &user_id),
                ("site_id", &site_id),
                ("form_id", &form_id),
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
            state,
        }
    }

    /// Returns the form id.
    #[must_use]
    pub fn id(&self) -> &str {
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

    /// Lists the submissions of this form.
    ///
    /// `params` are passed through as query parameters (e.g. `limit`).
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request or the conversion.
    pub async fn list_entries(
        &self,
        client: &CloudClient,
        params: Params,
    ) -> Result<ResourceList<FormEntry>, CloudError> {
        let response = client
            .get_with(&format!("{}/entry", self.url()), params)
            .await?;
        ResourceList::new(
            client,
            response,
            vec![
                self.user_id.clone(),
                self.site_id.clone(),
                self.form_id.clone(),
            ],
            FormEntry::array_from_json,
        )
    }

    /// Returns a lazily fetched entry of this form.
    #[must_use]
    pub fn entry(&self, form_entry_id: impl Into<String>) -> FormEntry {
        FormEntry::new(
            self.user_id.as_str(),
            self.site_id.as_str(),
            self.form_id.as_str(),
            form_entry_id,
        )
    }

    /// Converts a top-level array of forms. `ids` are `[user, site]`.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::UnexpectedResponse`] on any other shape.
    pub fn array_from_json(ids: &[String], json: &Value) -> Result<Vec<Self>, CloudError> {
        let user_id = ancestor(ids, 0, Self::NAME)?;
        let site_id = ancestor(ids, 1, Self::NAME)?;

        objects_from_array(json, "form_id", Self::NAME, |id, properties| {
            Self::from_json(user_id, site_id, id, properties)
        })
    }
}

impl CloudResource for Form {
    const NAME: &'static str = "Form";

    fn state(&self) -> &ResourceState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ResourceState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_url_and_entry_accessor() {
        let form = Form::new("1", "2", "3");
        assert_eq!(form.url(), "user/1/site/2/form/3");

        let entry = form.entry("4");
        assert_eq!(entry.url(), "user/1/site/2/form/3/entry/4");
        assert!(entry.properties().is_empty());
    }

    #[test]
    fn test_array_from_json() {
        let ids = vec!["1".to_string(), "2".to_string()];
        let forms = Form::array_from_json(&ids, &json!([{"form_id": "3", "name": "Contact"}])).unwrap();
        assert_eq!(forms[0].id(), "3");
        assert_eq!(forms[0].cached_property("name"), Some(&json!("Contact")));
    }
}
