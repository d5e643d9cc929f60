//! Blog post resource implementation.
//!
//! Blog posts belong to a blog and can be edited and deleted.
//!
//! # Example
//!
//! ```rust,ignore
//! use weebly_cloud::rest::{Deletable, Mutable};
//! use weebly_cloud::rest::resources::BlogPost;
//!
//! let mut post = BlogPost::new("42", "7", "3", "11");
//! post.set_property("post_title", "Release notes");
//! post.save(&client).await?;
//!
//! post.delete(&client).await?;
//! ```

use serde_json::{Map, Value};

use crate::clients::{CloudClient, CloudError};
use crate::rest::{build_path, CloudResource, Deletable, Mutable, ResourceState};

use super::common::{ancestor, objects_from_array};

/// A post in a site blog.
#[derive(Clone, Debug, PartialEq)]
pub struct BlogPost {
    user_id: String,
    site_id: String,
    blog_id: String,
    post_id: String,
    state: ResourceState,
}

impl BlogPost {
    /// URL template for a blog post.
    pub const PATH: &'static str = "user/{user_id}/site/{site_id}/blog/{blog_id}/post/{post_id}";

    /// Creates a blog post handle that is fetched on first property access.
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
    ) -> Self {
        Self::with_properties(user_id, site_id, blog_id, post_id, None)
    }

    /// Fetches a blog post.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request.
    pub async fn fetch(
        client: &CloudClient,
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
    ) -> Result<Self, CloudError> {
        let mut post = Self::new(user_id, site_id, blog_id, post_id);
        post.get(client).await?;
        Ok(post)
    }

    /// Creates a blog post from properties already known to the caller.
    #[must_use]
    pub fn from_json(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
        properties: Map<String, Value>,
    ) -> Self {
        Self::with_properties(user_id, site_id, blog_id, post_id, Some(properties))
    }

    fn with_properties(
        user_id: impl Into<String>,
        site_id: impl Into<String>,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
        properties: Option<Map<String, Value>>,
    ) -> Self {
        let (user_id, site_id, blog_id, post_id) =
            (user_id.into(), site_id.into(), blog_id.into(), post_id.into());
        let url = build_path(
            Self::PATH,
            &[
                ("user_id", &user_id),
                ("site_id", &site_id),
                ("blog_id", &blog_id),
                ("post_id", &post_id),
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
            post_id,
            state,
        }
    }

    /// Returns the post id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.post_id
    }

    /// Returns the id of the blog this post belongs to.
    #[must_use]
    pub fn blog_id(&self) -> &str {
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

    /// Converts a top-level array of posts. `ids` are `[user, site, blog]`.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::UnexpectedResponse`] if the body is not an array
    /// of posts with `post_id` fields.
    pub fn array_from_json(ids: &[String], json: &Value) -> Result<Vec<Self>, CloudError> {
        let user_id = ancestor(ids, 0, Self::NAME)?;
        let site_id = ancestor(ids, 1, Self::NAME)?;
        let blog_id = ancestor(ids, 2, Self::NAME)?;

        objects_from_array(json, "post_id", Self::NAME, |id, properties| {
            Self::from_json(user_id, site_id, blog_id, id, properties)
        })
    }
}

impl CloudResource for BlogPost {
    const NAME: &'static str = "BlogPost";

    fn state(&self) -> &ResourceState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ResourceState {
        &mut self.state
    }
}

impl Mutable for BlogPost {}

impl Deletable for BlogPost {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blog_post_url() {
        let post = BlogPost::new("1", "2", "3", "4");
        assert_eq!(post.url(), "user/1/site/2/blog/3/post/4");
        assert_eq!(post.blog_id(), "3");
    }

    #[test]
    fn test_array_from_json_accepts_numeric_ids() {
        let ids = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        let posts = BlogPost::array_from_json(
            &ids,
            &json!([{"post_id": 10, "post_title": "A"}, {"post_id": 11}]),
        )
        .unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id(), "10");
        assert_eq!(posts[1].url(), "user/1/site/2/blog/3/post/11");
        assert_eq!(posts[0].cached_property("post_title"), Some(&json!("A")));
    }

    #[test]
    fn test_staged_edit_not_visible_in_cache() {
        let mut post = BlogPost::from_json("1", "2", "3", "4", Map::new());
        post.set_property("post_title", "B");
        assert!(post.cached_property("post_title").is_none());
        assert_eq!(post.changed().get("post_title"), Some(&json!("B")));
    }
}
