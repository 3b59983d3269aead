//! Blog list use-cases backed by the blog and user repositories.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use super::ports::{
    BlogPersistenceError, BlogRepository, BlogsCommand, BlogsQuery, UserPersistenceError,
    UserRepository,
};
use super::{AuthenticatedUser, Blog, BlogDraft, BlogId, BlogPatch, Error};

fn map_blog_persistence_error(error: BlogPersistenceError) -> Error {
    match error {
        BlogPersistenceError::Connection { message } => Error::service_unavailable(message),
        BlogPersistenceError::Query { message } => Error::internal(message),
    }
}

fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
        UserPersistenceError::Duplicate { username } => {
            Error::internal(format!("unexpected duplicate user on read: {username}"))
        }
    }
}

fn blog_not_found(id: &BlogId) -> Error {
    Error::not_found(format!("blog {id} not found"))
}

/// Blog list service implementing [`BlogsQuery`] and [`BlogsCommand`].
#[derive(Clone)]
pub struct BlogService {
    blogs: Arc<dyn BlogRepository>,
    users: Arc<dyn UserRepository>,
}

impl BlogService {
    /// Build the service over the given repositories.
    pub fn new(blogs: Arc<dyn BlogRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { blogs, users }
    }
}

#[async_trait]
impl BlogsQuery for BlogService {
    async fn list_blogs(&self) -> Result<Vec<Blog>, Error> {
        self.blogs.list().await.map_err(map_blog_persistence_error)
    }
}

#[async_trait]
impl BlogsCommand for BlogService {
    async fn create_blog(
        &self,
        author: &AuthenticatedUser,
        draft: BlogDraft,
    ) -> Result<Blog, Error> {
        let owner = self
            .users
            .find_by_id(&author.id)
            .await
            .map_err(map_user_persistence_error)?
            .ok_or_else(|| {
                warn!(user_id = %author.id, "token subject no longer exists");
                Error::unauthorized("user no longer exists")
            })?;

        let blog = self
            .blogs
            .insert(draft.owned_by(Some(*owner.id())))
            .await
            .map_err(map_blog_persistence_error)?;
        info!(blog_id = %blog.id, user_id = %owner.id(), "blog created");
        Ok(blog)
    }

    async fn update_blog(&self, id: &BlogId, patch: BlogPatch) -> Result<Blog, Error> {
        let mut blog = self
            .blogs
            .find_by_id(id)
            .await
            .map_err(map_blog_persistence_error)?
            .ok_or_else(|| blog_not_found(id))?;
        blog.apply(patch);

        let found = self
            .blogs
            .update(&blog)
            .await
            .map_err(map_blog_persistence_error)?;
        if !found {
            return Err(blog_not_found(id));
        }
        Ok(blog)
    }

    async fn delete_blog(&self, requester: &AuthenticatedUser, id: &BlogId) -> Result<(), Error> {
        let blog = self
            .blogs
            .find_by_id(id)
            .await
            .map_err(map_blog_persistence_error)?
            .ok_or_else(|| blog_not_found(id))?;

        if !blog.is_deletable_by(&requester.id) {
            warn!(blog_id = %id, user_id = %requester.id, "delete refused for non-owner");
            return Err(Error::forbidden("only the creator can delete a blog"));
        }

        let removed = self
            .blogs
            .delete(id)
            .await
            .map_err(map_blog_persistence_error)?;
        if !removed {
            return Err(blog_not_found(id));
        }
        info!(blog_id = %id, user_id = %requester.id, "blog deleted");
        Ok(())
    }
}
