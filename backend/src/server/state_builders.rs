//! Builders for HTTP state ports over the configured repositories.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::info;

use crate::domain::ports::{
    BlogRepository, ContactRepository, PasswordHasher, TokenCodec, UserRepository,
};
use crate::domain::{BlogService, ContactService, UserService};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::{
    InMemoryBlogRepository, InMemoryContactRepository, InMemoryUserRepository,
};
use crate::outbound::persistence::{
    DbPool, DieselBlogRepository, DieselContactRepository, DieselUserRepository,
};
use crate::outbound::security::{Argon2PasswordHasher, JwtTokenCodec};

use super::ServerConfig;

/// Driven ports shared by the domain services.
struct Repositories {
    blogs: Arc<dyn BlogRepository>,
    contacts: Arc<dyn ContactRepository>,
    users: Arc<dyn UserRepository>,
}

impl Repositories {
    fn in_memory() -> Self {
        Self {
            blogs: Arc::new(InMemoryBlogRepository::new()),
            contacts: Arc::new(InMemoryContactRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
        }
    }

    fn postgres(pool: &DbPool) -> Self {
        Self {
            blogs: Arc::new(DieselBlogRepository::new(pool.clone())),
            contacts: Arc::new(DieselContactRepository::new(pool.clone())),
            users: Arc::new(DieselUserRepository::new(pool.clone())),
        }
    }

    fn for_config(config: &ServerConfig) -> Self {
        match &config.db_pool {
            Some(pool) => {
                info!(store = "postgres", "using database repositories");
                Self::postgres(pool)
            }
            None => {
                info!(store = "memory", "no database configured; data is not persisted");
                Self::in_memory()
            }
        }
    }
}

/// Build the HTTP state for `config` using the system clock.
pub fn build_http_state(config: &ServerConfig) -> HttpState {
    build_http_state_with_clock(config, Arc::new(DefaultClock))
}

/// Build the HTTP state for `config`, checking token expiry against `clock`.
pub fn build_http_state_with_clock(config: &ServerConfig, clock: Arc<dyn Clock>) -> HttpState {
    let Repositories {
        blogs,
        contacts,
        users,
    } = Repositories::for_config(config);

    let tokens: Arc<dyn TokenCodec> = Arc::new(JwtTokenCodec::new(
        &config.token_secret,
        config.token_ttl,
        clock,
    ));
    let hasher: Arc<dyn PasswordHasher> = Arc::new(
        config
            .hasher_params
            .clone()
            .map_or_else(Argon2PasswordHasher::default, Argon2PasswordHasher::with_params),
    );

    let blog_service = Arc::new(BlogService::new(blogs, users.clone()));
    let contact_service = Arc::new(ContactService::new(contacts));
    let user_service = Arc::new(UserService::new(users, hasher, tokens.clone()));

    HttpState::new(HttpStatePorts {
        blogs: blog_service.clone(),
        blogs_query: blog_service,
        contacts: contact_service.clone(),
        contacts_query: contact_service,
        users: user_service.clone(),
        users_query: user_service.clone(),
        login: user_service,
        tokens,
    })
}
