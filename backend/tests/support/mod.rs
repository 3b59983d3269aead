//! Shared helpers for backend integration tests.
//!
//! Each suite builds the full application over the in-memory store and
//! seeds it through the driving ports, so no database is needed.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::{App, web};
use argon2::Params;
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;

use bloglist::domain::{AuthenticatedUser, BlogDraft, LoginCredentials, Registration};
use bloglist::inbound::http::health::HealthState;
use bloglist::inbound::http::state::HttpState;
use bloglist::outbound::security::{JwtTokenCodec, TokenSecret};
use bloglist::server::{ServerConfig, build_app, build_http_state};

/// Secret shared by the server under test and forged tokens.
pub const SECRET: &str = "integration-secret";

/// Password given to every seeded account.
pub const PASSWORD: &str = "sekret";

/// Clock frozen at a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Application state plus helpers for seeding it.
pub struct TestServer {
    pub state: web::Data<HttpState>,
}

impl TestServer {
    pub fn new() -> Self {
        let config = ServerConfig::new(
            SocketAddr::from(([127, 0, 0, 1], 0)),
            TokenSecret::new(SECRET),
            TimeDelta::seconds(3600),
        )
        .with_hasher_params(Params::new(256, 1, 1, None).expect("valid test params"));
        Self {
            state: web::Data::new(build_http_state(&config)),
        }
    }

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
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        build_app(health, self.state.clone())
    }

    /// Register `username` and return a bearer token for it.
    pub async fn token_for(&self, username: &str) -> String {
        let registration = Registration::try_from_parts(username, "Test User", PASSWORD)
            .expect("valid registration");
        self.state
            .users
            .register(registration)
            .await
            .expect("register user");
        let credentials =
            LoginCredentials::try_from_parts(username, PASSWORD).expect("valid credentials");
        self.state
            .login
            .login(&credentials)
            .await
            .expect("login")
            .token
    }

    /// Store the two canonical blogs, owned by `token`'s user.
    pub async fn seed_blogs(&self, token: &str) {
        let owner = self.state.tokens.verify(token).expect("seed token");
        for (title, author, url, likes) in initial_blogs() {
            let draft = BlogDraft::try_new(
                Some(title.to_owned()),
                Some(author.to_owned()),
                Some(url.to_owned()),
                Some(likes),
            )
            .expect("valid seed blog");
            self.state
                .blogs
                .create_blog(&owner, draft)
                .await
                .expect("seed blog");
        }
    }
}

/// Blogs every suite starts from.
pub fn initial_blogs() -> [(&'static str, &'static str, &'static str, i64); 2] {
    [
        (
            "React patterns",
            "Michael Chan",
            "https://reactpatterns.com/",
            7,
        ),
        (
            "Go To Statement Considered Harmful",
            "Edsger W. Dijkstra",
            "http://www.u.arizona.edu/~rubinson/copyright_violations/Go_To_Considered_Harmful.html",
            5,
        ),
    ]
}

/// Sign a token for `user` that expired an hour before now.
pub fn expired_token(user: &AuthenticatedUser) -> String {
    let issued_at = Utc::now() - TimeDelta::hours(2);
    let codec = JwtTokenCodec::new(
        &TokenSecret::new(SECRET),
        TimeDelta::hours(1),
        Arc::new(FixedClock(issued_at)),
    );
    bloglist::domain::ports::TokenCodec::issue(&codec, user).expect("issue expired token")
}

/// Sign a token for `user` with a secret the server does not know.
pub fn foreign_token(user: &AuthenticatedUser) -> String {
    let codec = JwtTokenCodec::new(
        &TokenSecret::new("someone-else"),
        TimeDelta::hours(1),
        Arc::new(FixedClock(Utc::now())),
    );
    bloglist::domain::ports::TokenCodec::issue(&codec, user).expect("issue foreign token")
}

/// `Authorization` header carrying `token`.
pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("bearer {token}"))
}
