//! PostgreSQL-backed `BlogRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{BlogPersistenceError, BlogRepository};
use crate::domain::{Blog, BlogId, NewBlog, UserId};

use super::error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::{BlogRow, BlogUpdate, NewBlogRow};
use super::pool::{DbPool, PoolError};
use super::schema::blogs;

/// Diesel-backed implementation of the [`BlogRepository`] port.
#[derive(Clone)]
pub struct DieselBlogRepository {
    pool: DbPool,
}

impl DieselBlogRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BlogPersistenceError {
    BlogPersistenceError::connection(pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> BlogPersistenceError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => BlogPersistenceError::connection(message),
        DieselFailure::Query(message) => BlogPersistenceError::query(message),
        DieselFailure::UniqueViolation => BlogPersistenceError::query("duplicate blog id"),
    }
}

fn row_to_blog(row: BlogRow) -> Blog {
    Blog {
        id: BlogId::from_uuid(row.id),
        title: row.title,
        author: row.author,
        url: row.url,
        likes: row.likes,
        owner: row.user_id.map(UserId::from_uuid),
    }
}

#[async_trait]
impl BlogRepository for DieselBlogRepository {
    async fn list(&self) -> Result<Vec<Blog>, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<BlogRow> = blogs::table
            .order((blogs::created_at.asc(), blogs::id.asc()))
            .select(BlogRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_blog).collect())
    }

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<BlogRow> = blogs::table
            .filter(blogs::id.eq(id.as_uuid()))
            .select(BlogRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(row_to_blog))
    }

    async fn insert(&self, blog: NewBlog) -> Result<Blog, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = BlogId::random();
        let row: BlogRow = diesel::insert_into(blogs::table)
            .values(NewBlogRow {
                id: *id.as_uuid(),
                title: &blog.title,
                author: &blog.author,
                url: &blog.url,
                likes: blog.likes,
                user_id: blog.owner.map(|owner| *owner.as_uuid()),
            })
            .returning(BlogRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row_to_blog(row))
    }

    async fn update(&self, blog: &Blog) -> Result<bool, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let updated = diesel::update(blogs::table.filter(blogs::id.eq(blog.id.as_uuid())))
            .set(BlogUpdate {
                title: &blog.title,
                author: &blog.author,
                url: &blog.url,
                likes: blog.likes,
            })
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(updated > 0)
    }

    async fn delete(&self, id: &BlogId) -> Result<bool, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(blogs::table.filter(blogs::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
