//! Driving port for account registration.

use async_trait::async_trait;

use crate::domain::{Error, Registration, User};

/// Domain use-case port for creating accounts.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Hash the password and store the account; `InvalidRequest` when the
    /// username is taken.
    async fn register(&self, registration: Registration) -> Result<User, Error>;
}
