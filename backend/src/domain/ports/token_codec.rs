//! Port for issuing and verifying bearer tokens.

use crate::domain::AuthenticatedUser;

use super::define_port_error;

define_port_error! {
    /// Reasons a bearer token is refused or cannot be produced.
    pub enum TokenError {
        /// Token lifetime has passed.
        Expired => "token expired",
        /// Signature does not match the process secret.
        InvalidSignature => "token signature invalid",
        /// Token could not be decoded.
        Malformed { message: String } => "token malformed: {message}",
        /// Signing failed.
        Signing { message: String } => "token signing failed: {message}",
    }
}

/// Sign and verify bearer credentials.
#[cfg_attr(test, mockall::automock)]
pub trait TokenCodec: Send + Sync {
    /// Sign a token for `user`.
    fn issue(&self, user: &AuthenticatedUser) -> Result<String, TokenError>;

    /// Verify `token` and resolve the identity it carries.
    fn verify(&self, token: &str) -> Result<AuthenticatedUser, TokenError>;
}
