//! Weebly Cloud entity implementations.
//!
//! Entities form a tree rooted at the [`Account`]:
//!
//! ```text
//! Account
//!   User
//!     Site
//!       Blog
//!         BlogPost
//!       Form
//!         FormEntry
//!       Page
//!       Group
//!       Member
//! Plan
//! ```
//!
//! Every entity is addressed by the ids of itself and its ancestors. A
//! handle built with `new` holds no data and fetches itself on the first
//! property read; `fetch` loads it eagerly; `from_json` wraps properties
//! the caller already has (list pages and create responses use this, so a
//! freshly created entity never needs a second request).
//!
//! # Capabilities
//!
//! | Entity      | Mutable | Deletable |
//! |-------------|---------|-----------|
//! | `Account`   | yes     |           |
//! | `User`      | yes     |           |
//! | `Site`      | yes     | yes       |
//! | `Blog`      |         |           |
//! | `BlogPost`  | yes     | yes       |
//! | `Form`      |         |           |
//! | `FormEntry` |         |           |
//! | `Page`      | yes     |           |
//! | `Group`     | yes     | yes       |
//! | `Member`    | yes     | yes       |
//! | `Plan`      |         |           |
//!
//! # Example
//!
//! ```rust,ignore
//! use weebly_cloud::rest::{CloudResource, Mutable};
//! use weebly_cloud::rest::resources::Page;
//!
//! let mut page = Page::new("42", "7", "3");
//! let title = page.property(&client, "title").await?;
//!
//! page.set_property("title", "About us");
//! page.save(&client).await?;
//! ```

mod common;

mod account;
mod blog;
mod blog_post;
mod form;
mod form_entry;
mod group;
mod member;
mod page;
mod plan;
mod site;
mod user;

pub use account::Account;
pub use blog::Blog;
pub use blog_post::BlogPost;
pub use form::Form;
pub use form_entry::FormEntry;
pub use group::Group;
pub use member::Member;
pub use page::Page;
pub use plan::Plan;
pub use site::Site;
pub use user::User;
