//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BlogsCommand, BlogsQuery, ContactsCommand, ContactsQuery, LoginService, TokenCodec,
    UsersCommand, UsersQuery,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub blogs: Arc<dyn BlogsCommand>,
    pub blogs_query: Arc<dyn BlogsQuery>,
    pub contacts: Arc<dyn ContactsCommand>,
    pub contacts_query: Arc<dyn ContactsQuery>,
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub login: Arc<dyn LoginService>,
    pub tokens: Arc<dyn TokenCodec>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub blogs: Arc<dyn BlogsCommand>,
    pub blogs_query: Arc<dyn BlogsQuery>,
    pub contacts: Arc<dyn ContactsCommand>,
    pub contacts_query: Arc<dyn ContactsQuery>,
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub login: Arc<dyn LoginService>,
    /// Verifies bearer tokens for the [`BearerUser`](super::auth::BearerUser)
    /// extractor.
    pub tokens: Arc<dyn TokenCodec>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            blogs,
            blogs_query,
            contacts,
            contacts_query,
            users,
            users_query,
            login,
            tokens,
        } = ports;
        Self {
            blogs,
            blogs_query,
            contacts,
            contacts_query,
            users,
            users_query,
            login,
            tokens,
        }
    }
}
