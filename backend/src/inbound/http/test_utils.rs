//! Test helpers for inbound HTTP components.
//!
//! Builds the real services over in-memory adapters so handler tests run
//! without I/O.

use std::sync::Arc;

use actix_web::{App, web};
use argon2::Params;
use chrono::TimeDelta;
use mockable::DefaultClock;

use crate::Trace;
use crate::domain::ports::{TokenCodec, UserRepository};
use crate::domain::{
    AuthenticatedUser, BlogService, ContactService, NewUser, User, UserService, Username,
};
use crate::outbound::memory::{
    InMemoryBlogRepository, InMemoryContactRepository, InMemoryUserRepository,
};
use crate::outbound::security::{Argon2PasswordHasher, JwtTokenCodec, TokenSecret};

use super::error::json_config;
use super::state::{HttpState, HttpStatePorts};

/// Secret used by [`TestContext`] tokens.
pub const TEST_SECRET: &str = "test-secret";

/// In-memory wiring shared by handler tests.
pub struct TestContext {
    pub blogs: Arc<InMemoryBlogRepository>,
    pub contacts: Arc<InMemoryContactRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub tokens: Arc<JwtTokenCodec>,
    pub state: HttpState,
}

impl TestContext {
    pub fn new() -> Self {
        let blogs = Arc::new(InMemoryBlogRepository::new());
        let contacts = Arc::new(InMemoryContactRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let tokens = Arc::new(JwtTokenCodec::new(
            &TokenSecret::new(TEST_SECRET),
            TimeDelta::seconds(3600),
            Arc::new(DefaultClock),
        ));
        let params = Params::new(256, 1, 1, None).expect("valid test params");
        let hasher = Arc::new(Argon2PasswordHasher::with_params(params));

        let blog_service = Arc::new(BlogService::new(blogs.clone(), users.clone()));
        let contact_service = Arc::new(ContactService::new(contacts.clone()));
        let user_service = Arc::new(UserService::new(users.clone(), hasher, tokens.clone()));

        let state = HttpState::new(HttpStatePorts {
            blogs: blog_service.clone(),
            blogs_query: blog_service,
            contacts: contact_service.clone(),
            contacts_query: contact_service,
            users: user_service.clone(),
            users_query: user_service.clone(),
            login: user_service,
            tokens: tokens.clone(),
        });

        Self {
            blogs,
            contacts,
            users,
            tokens,
            state,
        }
    }

    /// Store a user directly and return it with a valid bearer token.
    pub async fn seed_user(&self, username: &str) -> (User, String) {
        let user = self
            .users
            .insert(NewUser {
                username: Username::new(username).expect("valid username"),
                name: format!("{username} display"),
                password_hash: "unused".to_owned(),
            })
            .await
            .expect("seed user");
        let token = self
            .tokens
            .issue(&AuthenticatedUser {
                id: *user.id(),
                username: user.username().to_string(),
            })
            .expect("issue token");
        (user, token)
    }

    /// App serving the `/api` routes over this context.
    pub fn app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(web::Data::new(self.state.clone()))
            .app_data(json_config())
            .wrap(Trace)
            .configure(super::configure_api)
    }
}

/// `Authorization` header for `token`.
pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}
