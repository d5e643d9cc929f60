//! Site resource implementation.
//!
//! This module provides the Site resource, a website owned by a user. Sites
//! are the parent of blogs, forms, pages, groups and members, and carry the
//! publishing, plan and theme operations.
//!
//! The API wraps a single site in a `site` key and lists sites under a
//! `sites` key.
//!
//! # Example
//!
//! ```rust,ignore
//! use weebly_cloud::rest::{Deletable, Mutable};
//! use weebly_cloud::rest::resources::Site;
//!
//! let mut site = Site::new("42", "7");
//!
//! site.set_publish_credentials(&client, "ftp.example.com", "me", "pw", "/www").await?;
//! site.publish(&client).await?;
//!
//! let link = site.login_link(&client).await?;
//!
//! // Child resources
//! let pages = site.list_pages(&client, Params::new()).await?;
//! let group = site.create_group(&client, "Staff").await?;
//!
//! site.delete(&client).await?;
//! ```

use serde_json::{Map, Value};

use crate::clients::{CloudClient, CloudError, CloudResponse, Params};
use crate::rest::{build_path, CloudResource, Deletable, Mutable, ResourceList, ResourceState};

use super::common::{
    ancestor, into_object, objects_from_array, required_id, string_field, unwrap_object,
    with_param,
};
use super::{Blog, Form, Group, Member, Page, Plan};

/// A site owned by a user.
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    user_id: String,
    site_id: String,
    state: ResourceState,
}

impl Site {
    /// URL template for a site.
    pub const PATH: &'static str = "user/{user_id}/site/{site_id}";

    /// Creates a site handle that is fetched on first property access.
    #[must_use]
    pub fn new(user_id: impl Into<String>, site_id: impl Into<String>) -> Self {
        Self::with_properties(user_id, site_id, None)
    }

    /// Fetches a site.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request, or
    /// [`CloudError::UnexpectedResponse`] if the body has no `site` object.
    pub async fn fetch(
        client: &CloudClient,
        user_id: impl Into<String>,
        site_id: impl Into<String>,
    ) -> Result<Self, CloudError> {
        let mut site = Self::new(user_id, site_id);
        site.get(client).await?;
        Ok(site)
    }

    /// Creates a site from properties already known to the caller.
    #[must_use]
    pub fn from_json(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        properties: Map<String, Value>,
    ) -> Self {
        Self::with_properties(user_id, site_id, Some(properties))
    }

    fn with_properties(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        properties: Option<Map<String, Value>>,
    ) -> Self {
        let (user_id, site_id) = (user_id.into(), site_id.into());
        let url = build_path(Self::PATH, &[("user_id", &user_id), ("site_id", &site_id)]);
        let state = match properties {
            Some(properties) => ResourceState::from_json(url, properties),
            None => ResourceState::new(url),
        };

        Self {
            user_id,
            site_id,
            state,
        }
    }

    /// Returns the site id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.site_id
    }

    /// Returns the id of the owning user.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Converts a `{"sites": [...]}` body. `ids` are `[user]`.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::UnexpectedResponse`] on any other shape.
    pub fn array_from_json(ids: &[String], json: &Value) -> Result<Vec<Self>, CloudError> {
        let user_id = ancestor(ids, 0, Self::NAME)?;
        let sites = json
            .get("sites")
            .ok_or_else(|| CloudError::unexpected("response has no 'sites' array"))?;

        objects_from_array(sites, "site_id", Self::NAME, |id, properties| {
            Self::from_json(user_id, id, properties)
        })
    }

    fn ids(&self) -> Vec<String> {
        vec![self.user_id.clone(), self.site_id.clone()]
    }

    /// Builds a sub-endpoint URL, refusing once the site has been deleted.
    fn endpoint(&self, suffix: &str) -> Result<String, CloudError> {
        self.state.ensure_live()?;
        Ok(format!("{}/{suffix}", self.url()))
    }

    async fn action(
        &self,
        client: &CloudClient,
        suffix: &str,
        data: Params,
    ) -> Result<CloudResponse, CloudError> {
        client.post_with(&self.endpoint(suffix)?, data).await
    }

    /// Publishes the site.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request.
    pub async fn publish(&self, client: &CloudClient) -> Result<(), CloudError> {
        self.action(client, "publish", Params::new()).await?;
        Ok(())
    }

    /// Unpublishes the site.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request.
    pub async fn unpublish(&self, client: &CloudClient) -> Result<(), CloudError> {
        self.action(client, "unpublish", Params::new()).await?;
        Ok(())
    }

    /// Generates a one-time link that logs the owner into the site editor.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request, or
    /// [`CloudError::UnexpectedResponse`] if the body has no `link`.
    pub async fn login_link(&self, client: &CloudClient) -> Result<String, CloudError> {
        let response = self.action(client, "loginLink", Params::new()).await?;
        string_field(&response.body, "link")
    }

    /// Sets the FTP credentials used when publishing.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request.
    pub async fn set_publish_credentials(
        &self,
        client: &CloudClient,
        host: &str,
        username: &str,
        password: &str,
        path: &str,
    ) -> Result<(), CloudError> {
        let data = with_param(Params::new(), "publish_host", host);
        let data = with_param(data, "publish_username", username);
        let data = with_param(data, "publish_password", password);
        let data = with_param(data, "publish_path", path);
        self.action(client, "setPublishCredentials", data).await?;
        Ok(())
    }

    /// Restores a deleted site under the given domain.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request.
    pub async fn restore(&self, client: &CloudClient, domain: &str) -> Result<(), CloudError> {
        let data = with_param(Params::new(), "domain", domain);
        self.action(client, "restore", data).await?;
        Ok(())
    }

    /// Re-enables a suspended site.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request.
    pub async fn enable(&self, client: &CloudClient) -> Result<(), CloudError> {
        self.action(client, "enable", Params::new()).await?;
        Ok(())
    }

    /// Suspends the site.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request.
    pub async fn disable(&self, client: &CloudClient) -> Result<(), CloudError> {
        self.action(client, "disable", Params::new()).await?;
        Ok(())
    }

    /// Returns the plan the site is on.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request, or
    /// [`CloudError::UnexpectedResponse`] if the response lists no plan.
    pub async fn plan(&self, client: &CloudClient) -> Result<Plan, CloudError> {
        let response = client.get(&self.endpoint("plan")?).await?;
        Plan::array_from_json(&[], &response.body)?
            .into_iter()
            .next()
            .ok_or_else(|| CloudError::unexpected("site has no plan"))
    }

    /// Moves the site to another plan for `term` billing periods.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request.
    pub async fn set_plan(&self, client: &CloudClient, plan_id: &str, term: u32) -> Result<(), CloudError> {
        let data = with_param(Params::new(), "plan_id", plan_id);
        let data = with_param(data, "term", term);
        self.action(client, "plan", data).await?;
        Ok(())
    }

    /// Applies a theme to the site.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request.
    pub async fn set_theme(&self, client: &CloudClient, theme_id: &str, is_custom: bool) -> Result<(), CloudError> {
        let data = with_param(Params::new(), "theme_id", theme_id);
        let data = with_param(data, "is_custom", is_custom);
        self.action(client, "theme", data).await?;
        Ok(())
    }

    /// Lists the blogs of the site.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request or the conversion.
    pub async fn list_blogs(&self, client: &CloudClient) -> Result<ResourceList<Blog>, CloudError> {
        let response = client.get(&self.endpoint("blog")?).await?;
        ResourceList::new(client, response, self.ids(), Blog::array_from_json)
    }

    /// Returns a lazily fetched blog of the site.
    #[must_use]
    pub fn blog(&self, blog_id: impl Into<String>) -> Blog {
        Blog::new(self.user_id.as_str(), self.site_id.as_str(), blog_id)
    }

    /// Lists the forms of the site.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request or the conversion.
    pub async fn list_forms(&self, client: &CloudClient, params: Params) -> Result<ResourceList<Form>, CloudError> {
        let response = client.get_with(&self.endpoint("form")?, params).await?;
        ResourceList::new(client, response, self.ids(), Form::array_from_json)
    }

    /// Returns a lazily fetched form of the site.
    #[must_use]
    pub fn form(&self, form_id: impl Into<String>) -> Form {
        Form::new(self.user_id.as_str(), self.site_id.as_str(), form_id)
    }

    /// Lists the pages of the site.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request or the conversion.
    pub async fn list_pages(&self, client: &CloudClient, params: Params) -> Result<ResourceList<Page>, CloudError> {
        let response = client.get_with(&self.endpoint("page")?, params).await?;
        ResourceList::new(client, response, self.ids(), Page::array_from_json)
    }

    /// Returns a lazily fetched page of the site.
    #[must_use]
    pub fn page(&self, page_id: impl Into<String>) -> Page {
        Page::new(self.user_id.as_str(), self.site_id.as_str(), page_id)
    }

    /// Lists the member groups of the site.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request or the conversion.
    pub async fn list_groups(&self, client: &CloudClient, params: Params) -> Result<ResourceList<Group>, CloudError> {
        let response = client.get_with(&self.endpoint("group")?, params).await?;
        ResourceList::new(client, response, self.ids(), Group::array_from_json)
    }

    /// Returns a lazily fetched group of the site.
    #[must_use]
    pub fn group(&self, group_id: impl Into<String>) -> Group {
        Group::new(self.user_id.as_str(), self.site_id.as_str(), group_id)
    }

    /// Creates a member group. The group is hydrated from the response.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request, or
    /// [`CloudError::UnexpectedResponse`] if the response has no `group_id`.
    pub async fn create_group(&self, client: &CloudClient, name: &str) -> Result<Group, CloudError> {
        let data = with_param(Params::new(), "name", name);
        let response = self.action(client, "group", data).await?;

        let group_id = required_id(&response.body, "group_id", Group::NAME)?;
        let properties = into_object(response.body, Group::NAME)?;
        Ok(Group::from_json(
            self.user_id.as_str(),
            self.site_id.as_str(),
            group_id,
            properties,
        ))
    }

    /// Lists the members of the site.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request or the conversion.
    pub async fn list_members(&self, client: &CloudClient, params: Params) -> Result<ResourceList<Member>, CloudError> {
        let response = client.get_with(&self.endpoint("member")?, params).await?;
        ResourceList::new(client, response, self.ids(), Member::array_from_json)
    }

    /// Returns a lazily fetched member of the site.
    #[must_use]
    pub fn member(&self, member_id: impl Into<String>) -> Member {
        Member::new(self.user_id.as_str(), self.site_id.as_str(), member_id)
    }

    /// Creates a member from `data` (e.g. `email`, `name`, `password`).
    /// The member is hydrated from the response.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request, or
    /// [`CloudError::UnexpectedResponse`] if the response has no `member_id`.
    pub async fn create_member(&self, client: &CloudClient, data: Params) -> Result<Member, CloudError> {
        let response = self.action(client, "member", data).await?;

        let member_id = required_id(&response.body, "member_id", Member::NAME)?;
        let properties = into_object(response.body, Member::NAME)?;
        Ok(Member::from_json(
            self.user_id.as_str(),
            self.site_id.as_str(),
            member_id,
            properties,
        ))
    }
}

impl CloudResource for Site {
    const NAME: &'static str = "Site";

    fn state(&self) -> &ResourceState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ResourceState {
        &mut self.state
    }

    fn properties_from_json(&self, body: Value) -> Result<Map<String, Value>, CloudError> {
        unwrap_object(body, "site", Self::NAME)
    }
}

impl Mutable for Site {}

impl Deletable for Site {}
