//! Blog resource implementation.
//!
//! This module provides the Blog resource, which represents a blog on a
//! Weebly site. Blogs are containers for posts and are read-only.
//!
//! # Example
//!
//! ```rust,ignore
//! use weebly_cloud::rest::resources::Blog;
//!
//! let blog = Blog::new("42", "7", "3");
//!
//! // Create a post; the returned post is hydrated from the response
//! let post = blog.create_post(&client, "<p>Hello</p>", Params::new()).await?;
//!
//! // List posts
//! let posts = blog.list_posts(&client).await?;
//! println!("{} posts", posts.size());
//! ```

use serde_json::{Map, Value};

use crate::clients::{CloudClient, CloudError, Params};
use crate::rest::{build_path, CloudResource, ResourceList, ResourceState};

use super::common::{ancestor, into_object, objects_from_array, required_id, with_param};
use super::BlogPost;

/// A blog on a site.
#[derive(Clone, Debug, PartialEq)]
pub struct Blog {
    user_id: String,
    site_id: String,
    blog_id: String,
    state: ResourceState,
}

impl Blog {
    /// URL template for a blog.
    pub const PATH: &'static str = "user/{user_id}/site/{site_id}/blog/{blog_id}";

    /// Creates a blog handle that is fetched on first property access.
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        blog_id: impl Into<String>,
    ) -> Self {
        Self::with_properties(user_id, site_id, blog_id, None)
    }

    /// Fetches a blog.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request.
    pub async fn fetch(
        client: &CloudClient,
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        blog_id: impl Into<String>,
    ) -> Result<Self, CloudError> {
        let mut blog = Self::new(user_id, site_id, blog_id);
        blog.get(client).await?;
        Ok(blog)
    }

    /// Creates a blog from properties already known to the caller.
    #[must_use]
    pub fn from_json(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        blog_id: impl Into<String>,
        properties: Map<String, Value>,
    ) -> Self {
        Self::with_properties(user_id, site_id, blog_id, Some(properties))
    }

    fn with_properties(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        blog_id: impl Into<String>,
        properties: Option<Map<String, Value>>,
    ) -> Self {
        let (user_id, site_id, blog_id) = (user_id.into(), site_id.into(), blog_id.into());
        let url = build_path(
            Self::PATH,
            &[
                ("user_id", &user_id),
                ("site_id", &site_id),
                ("blog_id", &blog_id),
            ],
        );
        let state = match properties {
            Some(properties) => ResourceState::from_json(url, properties),
            None => ResourceState::new(url),
        };

        Self {
            user_id,
            site_id,
            blog_id,
            state,
        }
    }

    /// Returns the blog id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.blog_id
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

    fn ids(&self) -> Vec<String> {
        vec![
            self.user_id.clone(),
            self.site_id.clone(),
            self.blog_id.clone(),
        ]
    }

    /// Lists the posts of this blog.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request or the conversion.
    pub async fn list_posts(&self, client: &CloudClient) -> Result<ResourceList<BlogPost>, CloudError> {
        let response = client.get(&format!("{}/post", self.url())).await?;
        ResourceList::new(client, response, self.ids(), BlogPost::array_from_json)
    }

    /// Creates a post with the given body and extra fields.
    ///
    /// The returned post is hydrated from the response without another request.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request, or
    /// [`CloudError::UnexpectedResponse`] if the response has no `post_id`.
    pub async fn create_post(
        &self,
        client: &CloudClient,
        post_body: &str,
        data: Params,
    ) -> Result<BlogPost, CloudError> {
        let data = with_param(data, "post_body", post_body);
        let response = client
            .post_with(&format!("{}/post", self.url()), data)
            .await?;

        let post_id = required_id(&response.body, "post_id", BlogPost::NAME)?;
        let properties = into_object(response.body, BlogPost::NAME)?;
        Ok(BlogPost::from_json(
            self.user_id.as_str(),
            self.site_id.as_str(),
            self.blog_id.as_str(),
            post_id,
            properties,
        ))
    }

    /// Returns a lazily fetched post of this blog.
    #[must_use]
    pub fn post(&self, post_id: impl Into<String>) -> BlogPost {
        BlogPost::new(
            self.user_id.as_str(),
            self.site_id.as_str(),
            self.blog_id.as_str(),
            post_id,
        )
    }

    /// Converts a top-level array of blogs. `ids` are `[user, site]`.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::UnexpectedResponse`] on any other shape.
    pub fn array_from_json(ids: &[String], json: &Value) -> Result<Vec<Self>, CloudError> {
        let user_id = ancestor(ids, 0, Self::NAME)?;
        let site_id = ancestor(ids, 1, Self::NAME)?;

        objects_from_array(json, "blog_id", Self::NAME, |id, properties| {
            Self::from_json(user_id, site_id, id, properties)
        })
    }
}

impl CloudResource for Blog {
    const NAME: &'static str = "Blog";

    fn state(&self) -> &ResourceState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ResourceState {
        &mut self.state
    }
}
