//! User resource implementation.
//!
//! Users own sites. The API wraps a single user in a `user` key.
//!
//! # Example
//!
//! ```rust,ignore
//! use weebly_cloud::rest::resources::User;
//!
//! let user = User::new("42");
//! let site = user.create_site(&client, "example.com", Params::new()).await?;
//! let link = user.login_link(&client).await?;
//! ```

use serde_json::{Map, Value};

use crate::clients::{CloudClient, CloudError, Params};
use crate::rest::{build_path, CloudResource, Mutable, ResourceList, ResourceState};

use super::common::{required_id, string_field, unwrap_object, with_param};
use super::Site;

/// A Weebly Cloud user.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    user_id: String,
    state: ResourceState,
}

impl User {
    /// URL template for a user.
    pub const PATH: &'static str = "user/{user_id}";

    /// Creates a user handle that is fetched on first property access.
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        Self {
            state: ResourceState::new(Self::resource_url(&user_id)),
            user_id,
        }
    }

    /// Fetches a user.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request, or
    /// [`CloudError::UnexpectedResponse`] if the body has no `user` object.
    pub async fn fetch(client: &CloudClient, user_id: impl Into<String>) -> Result<Self, CloudError> {
        let mut user = Self::new(user_id);
        user.get(client).await?;
        Ok(user)
    }

    /// Creates a user from properties already known to the caller.
    #[must_use]
    pub fn from_json(user_id: impl Into<String>, properties: Map<String, Value>) -> Self {
        let user_id = user_id.into();
        Self {
            state: ResourceState::from_json(Self::resource_url(&user_id), properties),
            user_id,
        }
    }

    fn resource_url(user_id: &str) -> String {
        build_path(Self::PATH, &[("user_id", user_id)])
    }

    /// Returns the user id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.user_id
    }

    /// Re-enables a suspended user.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request.
    pub async fn enable(&self, client: &CloudClient) -> Result<(), CloudError> {
        client.post(&format!("{}/enable", self.url())).await?;
        Ok(())
    }

    /// Suspends the user.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request.
    pub async fn disable(&self, client: &CloudClient) -> Result<(), CloudError> {
        client.post(&format!("{}/disable", self.url())).await?;
        Ok(())
    }

    /// Generates a one-time link that logs the user into the editor.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request, or
    /// [`CloudError::UnexpectedResponse`] if the body has no `link`.
    pub async fn login_link(&self, client: &CloudClient) -> Result<String, CloudError> {
        let response = client.post(&format!("{}/loginLink", self.url())).await?;
        string_field(&response.body, "link")
    }

    /// Returns the themes available to the user as raw JSON objects.
    ///
    /// `params` are passed through as query parameters (e.g. `limit`).
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request, or
    /// [`CloudError::UnexpectedResponse`] if the body has no `data` array.
    pub async fn available_themes(&self, client: &CloudClient, params: Params) -> Result<Vec<Value>, CloudError> {
        let response = client
            .get_with(&format!("{}/theme", self.url()), params)
            .await?;

        match response.body {
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(themes)) => Ok(themes),
                _ => Err(CloudError::unexpected("response has no 'data' array")),
            },
            _ => Err(CloudError::unexpected("response has no 'data' array")),
        }
    }

    /// Uploads a custom theme from a zip archive URL.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request.
    pub async fn create_custom_theme(&self, client: &CloudClient, name: &str, zip_url: &str) -> Result<(), CloudError> {
        let data = with_param(Params::new(), "name", name);
        let data = with_param(data, "zip_url", zip_url);
        client.post_with(&format!("{}/theme", self.url()), data).await?;
        Ok(())
    }

    /// Creates a site for this user. The site is hydrated from the response.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request, or
    /// [`CloudError::UnexpectedResponse`] if the body has no `site` object.
    pub async fn create_site(&self, client: &CloudClient, domain: &str, data: Params) -> Result<Site, CloudError> {
        let data = with_param(data, "domain", domain);
        let response = client
            .post_with(&format!("{}/site", self.url()), data)
            .await?;

        let site = response.body.get("site").unwrap_or(&Value::Null);
        let site_id = required_id(site, "site_id", Site::NAME)?;
        let properties = unwrap_object(response.body, "site", Site::NAME)?;
        Ok(Site::from_json(self.user_id.as_str(), site_id, properties))
    }

    /// Lists the user's sites.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request or the conversion.
    pub async fn list_sites(&self, client: &CloudClient, params: Params) -> Result<ResourceList<Site>, CloudError> {
        let response = client
            .get_with(&format!("{}/site", self.url()), params)
            .await?;
        ResourceList::new(
            client,
            response,
            vec![self.user_id.clone()],
            Site::array_from_json,
        )
    }

    /// Returns a lazily fetched site of this user.
    #[must_use]
    pub fn site(&self, site_id: impl Into<String>) -> Site {
        Site::new(self.user_id.as_str(), site_id)
    }
}

impl CloudResource for User {
    const NAME: &'static str = "User";

    fn state(&self) -> &ResourceState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ResourceState {
        &mut self.state
    }

    fn properties_from_json(&self, body: Value) -> Result<Map<String, Value>, CloudError> {
        unwrap_object(body, "user", Self::NAME)
    }
}

impl Mutable for User {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_url_and_site_accessor() {
        let user = User::new("42");
        assert_eq!(user.url(), "user/42");
        assert_eq!(user.site("7").url(), "user/42/site/7");
        assert_eq!(user.site("7").user_id(), "42");
    }

    #[test]
    fn test_properties_unwrapped_from_user_key() {
        let user = User::new("42");
        let props = user
            .properties_from_json(json!({"user": {"user_id": "42", "email": "a@b.c"}}))
            .unwrap();
        assert_eq!(props.get("email"), Some(&json!("a@b.c")));
        assert!(user.properties_from_json(json!({"email": "a@b.c"})).is_err());
    }
}
