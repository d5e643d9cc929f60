//! Pagination-transparent resource lists.
//!
//! This module provides [`ResourceList<T>`], one logical list of entities
//! that may span several server-side pages, and [`ListCursor`], a forward
//! cursor that fetches further pages on demand.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut sites = user.list_sites(&client, Params::new()).await?;
//! println!("{} sites in total", sites.size());
//!
//! let mut cursor = sites.cursor();
//! while let Some(site) = cursor.try_next().await? {
//!     println!("{}", site.id());
//! }
//! ```
//!
//! `size()` is the server-reported total as soon as the first page arrives,
//! while `len()` counts only the entities fetched so far.

use serde_json::Value;

use crate::clients::{CloudClient, CloudError, CloudResponse};

/// Converts one page body into entities, given the ancestor ids.
pub type ConvertFn<T> = fn(&[String], &Value) -> Result<Vec<T>, CloudError>;

/// A list of entities backed by a possibly paginated endpoint.
///
/// Pages are appended in server order. A list is meant to be driven by one
/// caller at a time: fetching a page takes `&mut self`.
pub struct ResourceList<T> {
    client: CloudClient,
    response: CloudResponse,
    ids: Vec<String>,
    convert: ConvertFn<T>,
    items: Vec<T>,
    size: usize,
    is_paginated: bool,
}

impl<T> ResourceList<T> {
    /// Builds a list from the first page of a response.
    ///
    /// The first page is converted immediately.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `convert`.
    pub fn new(
        client: &CloudClient,
        response: CloudResponse,
        ids: Vec<String>,
        convert: ConvertFn<T>,
    ) -> Result<Self, CloudError> {
        let items = convert(&ids, &response.body)?;
        let is_paginated = response.is_paginated();
        let size = match response.total() {
            Some(total) if is_paginated => usize::try_from(total).unwrap_or(usize::MAX),
            _ => items.len(),
        };

        Ok(Self {
            client: client.clone(),
            response,
            ids,
            convert,
            items,
            size,
            is_paginated,
        })
    }

    /// Fetches the next page and appends its entities.
    ///
    /// Returns `Ok(false)` when there is no further page; the list is left
    /// unchanged in that case.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request or the conversion. The list
    /// keeps its current page, so the call can be retried.
    pub async fn next_page(&mut self) -> Result<bool, CloudError> {
        let Some(response) = self.response.next_page(&self.client).await? else {
            return Ok(false);
        };

        let items = (self.convert)(&self.ids, &response.body)?;
        self.items.extend(items);
        self.response = response;
        Ok(true)
    }

    /// Returns the server-reported total when paginated, otherwise the
    /// number of entities in the single page.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of entities fetched so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no entities have been fetched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if the first response was one page of a larger result set.
    #[must_use]
    pub const fn is_paginated(&self) -> bool {
        self.is_paginated
    }

    /// Returns the entities fetched so far.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the ancestor ids passed to the conversion function.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Returns the most recent page response.
    #[must_use]
    pub const fn response(&self) -> &CloudResponse {
        &self.response
    }

    /// Consumes the list, returning the entities fetched so far.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Fetches every remaining page and returns all entities.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while fetching a page.
    pub async fn collect_all(mut self) -> Result<Vec<T>, CloudError> {
        while self.is_paginated && self.next_page().await? {}
        Ok(self.items)
    }

    /// Returns a cursor positioned at the first entity.
    pub fn cursor(&mut self) -> ListCursor<'_, T> {
        ListCursor {
            list: self,
            position: 0,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ResourceList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceList")
            .field("path", &self.response.path)
            .field("size", &self.size)
            .field("is_paginated", &self.is_paginated)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// A forward cursor over a [`ResourceList`] that fetches pages on demand.
///
/// Entities already fetched are yielded first; when they run out and the list
/// is paginated, the next page is requested.
pub struct ListCursor<'a, T> {
    list: &'a mut ResourceList<T>,
    position: usize,
}

impl<T> ListCursor<'_, T> {
    /// Returns the next entity, fetching the next page if needed.
    ///
    /// # Errors
    ///
    /// Returns any error raised while fetching a page. The cursor keeps its
    /// position, so calling again retries the same page.
    pub async fn try_next(&mut self) -> Result<Option<&mut T>, CloudError> {
        while self.position >= self.list.items.len() {
            if !self.list.is_paginated || !self.list.next_page().await? {
                return Ok(None);
            }
        }

        let item = self.list.items.get_mut(self.position);
        self.position += 1;
        Ok(item)
    }

    /// Returns the next entity, treating a page fetch failure as the end.
    ///
    /// The failure is logged and otherwise discarded. Use
    /// [`try_next`](Self::try_next) to see it.
    #[allow(clippy::should_implement_trait)]
    pub async fn next(&mut self) -> Option<&mut T> {
        let path = self.list.response.path.clone();
        match self.try_next().await {
            Ok(item) => item,
            Err(error) => {
                tracing::warn!(
                    path = %path,
                    error = %error,
                    "Ending list iteration after failed page fetch"
                );
                None
            }
        }
    }

    /// Returns the number of entities yielded so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}
