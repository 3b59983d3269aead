//! Driving port for exchanging credentials for a bearer token.

use async_trait::async_trait;

use crate::domain::{Error, IssuedToken, LoginCredentials};

/// Domain use-case port for logging in.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and sign a token; `Unauthorized` on mismatch.
    async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedToken, Error>;
}
