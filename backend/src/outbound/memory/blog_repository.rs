//! In-memory blog store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{BlogPersistenceError, BlogRepository};
use crate::domain::{Blog, BlogId, NewBlog};

/// Blog repository backed by a locked vector.
#[derive(Debug, Default)]
pub struct InMemoryBlogRepository {
    blogs: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list(&self) -> Result<Vec<Blog>, BlogPersistenceError> {
        Ok(self.blogs.read().await.clone())
    }

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogPersistenceError> {
        let blogs = self.blogs.read().await;
        Ok(blogs.iter().find(|blog| blog.id == *id).cloned())
    }

    async fn insert(&self, blog: NewBlog) -> Result<Blog, BlogPersistenceError> {
        let stored = blog.into_blog(BlogId::random());
        self.blogs.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, blog: &Blog) -> Result<bool, BlogPersistenceError> {
        let mut blogs = self.blogs.write().await;
        let Some(slot) = blogs.iter_mut().find(|stored| stored.id == blog.id) else {
            return Ok(false);
        };
        // The owner is fixed at creation.
        let owner = slot.owner;
        *slot = Blog {
            owner,
            ..blog.clone()
        };
        Ok(true)
    }

    async fn delete(&self, id: &BlogId) -> Result<bool, BlogPersistenceError> {
        let mut blogs = self.blogs.write().await;
        let before = blogs.len();
        blogs.retain(|blog| blog.id != *id);
        Ok(blogs.len() != before)
    }
}
