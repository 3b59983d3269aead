//! Port abstraction for blog persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Blog, BlogId, NewBlog};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by blog repository adapters.
    pub enum BlogPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "blog repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "blog repository query failed: {message}",
    }
}

/// Storage for blog list entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Every stored blog in insertion order.
    async fn list(&self) -> Result<Vec<Blog>, BlogPersistenceError>;

    /// Fetch one blog.
    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogPersistenceError>;

    /// Store a new blog under a freshly assigned id.
    async fn insert(&self, blog: NewBlog) -> Result<Blog, BlogPersistenceError>;

    /// Replace a stored blog's mutable fields; `false` when the id is unknown.
    async fn update(&self, blog: &Blog) -> Result<bool, BlogPersistenceError>;

    /// Remove a blog; `false` when the id is unknown.
    async fn delete(&self, id: &BlogId) -> Result<bool, BlogPersistenceError>;
}
