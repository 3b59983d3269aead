//! Driving port for blog list mutations.

use async_trait::async_trait;

use crate::domain::{AuthenticatedUser, Blog, BlogDraft, BlogId, BlogPatch, Error};

/// Domain use-case port for creating, updating, and deleting blogs.
#[async_trait]
pub trait BlogsCommand: Send + Sync {
    /// Store a validated draft owned by `author`.
    async fn create_blog(&self, author: &AuthenticatedUser, draft: BlogDraft)
    -> Result<Blog, Error>;

    /// Apply `patch` to the blog `id`; `NotFound` when absent.
    async fn update_blog(&self, id: &BlogId, patch: BlogPatch) -> Result<Blog, Error>;

    /// Delete the blog `id` on behalf of `requester`.
    ///
    /// `NotFound` when absent, `Forbidden` when owned by someone else.
    async fn delete_blog(&self, requester: &AuthenticatedUser, id: &BlogId) -> Result<(), Error>;
}
