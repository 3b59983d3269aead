//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: `RwLock`-guarded stores used when no database is configured
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **security**: Argon2 password hashing and HS256 bearer tokens
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;
pub mod security;
