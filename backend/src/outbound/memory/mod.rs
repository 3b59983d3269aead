//! In-memory adapters for the repository ports.
//!
//! Each store keeps its records in a `tokio::sync::RwLock<Vec<_>>`, so list
//! order is insertion order. Used when no database is configured and by the
//! HTTP tests.

mod blog_repository;
mod contact_repository;
mod user_repository;

pub use blog_repository::InMemoryBlogRepository;
pub use contact_repository::InMemoryContactRepository;
pub use user_repository::InMemoryUserRepository;
