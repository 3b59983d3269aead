//! Driving port for reading the blog list.

use async_trait::async_trait;

use crate::domain::{Blog, Error};

/// Domain use-case port for listing blogs.
#[async_trait]
pub trait BlogsQuery: Send + Sync {
    /// Every blog in the list.
    async fn list_blogs(&self) -> Result<Vec<Blog>, Error>;
}
