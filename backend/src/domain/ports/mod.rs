//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports (repositories, hashing, tokens) expose strongly typed errors
//! so adapters map their failures into predictable variants. Driving ports
//! (queries and commands) speak the API [`Error`](crate::domain::Error) and
//! are what inbound adapters hold.

mod macros;
pub(crate) use macros::define_port_error;

mod blog_repository;
mod blogs_command;
mod blogs_query;
mod contact_repository;
mod contacts_command;
mod contacts_query;
mod login_service;
mod password_hasher;
mod token_codec;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use blog_repository::MockBlogRepository;
pub use blog_repository::{BlogPersistenceError, BlogRepository};
pub use blogs_command::BlogsCommand;
pub use blogs_query::BlogsQuery;
#[cfg(test)]
pub use contact_repository::MockContactRepository;
pub use contact_repository::{ContactPersistenceError, ContactRepository};
pub use contacts_command::ContactsCommand;
pub use contacts_query::ContactsQuery;
pub use login_service::LoginService;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use token_codec::MockTokenCodec;
pub use token_codec::{TokenCodec, TokenError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users_command::UsersCommand;
pub use users_query::UsersQuery;
