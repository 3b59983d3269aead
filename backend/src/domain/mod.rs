//! Domain primitives, aggregates, and services.
//!
//! Purpose: define strongly typed entities used by the HTTP and persistence
//! layers, the ports those layers plug into, and the services that implement
//! the driving ports. Nothing in here knows about actix or diesel.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and its stable identifier.
//! - Blog, Contact, User: stored aggregates and their validated drafts.
//! - BlogService, ContactService, UserService: use-case implementations.

pub mod auth;
pub mod blog;
pub mod blog_service;
pub mod contact;
pub mod contact_service;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::auth::{
    AuthenticatedUser, CredentialsValidationError, IssuedToken, LoginCredentials, Registration,
};
pub use self::blog::{
    Blog, BlogDraft, BlogField, BlogId, BlogPatch, BlogValidationError, NewBlog,
};
pub use self::blog_service::BlogService;
pub use self::contact::{Contact, ContactDraft, ContactId, ContactValidationError};
pub use self::contact_service::ContactService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{CREDENTIAL_MIN, NewUser, User, UserId, UserValidationError, Username};
pub use self::user_service::UserService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use bloglist::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
