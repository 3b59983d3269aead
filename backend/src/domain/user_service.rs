//! Account registration, listing, and login.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use super::ports::{
    LoginService, PasswordHashError, PasswordHasher, TokenCodec, UserPersistenceError,
    UserRepository, UsersCommand, UsersQuery,
};
use super::{AuthenticatedUser, Error, IssuedToken, LoginCredentials, NewUser, Registration, User};

fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
        UserPersistenceError::Duplicate { username } => {
            Error::invalid_request("expected `username` to be unique").with_details(json!({
                "field": "username",
                "value": username,
                "code": "username_taken",
            }))
        }
    }
}

fn map_hash_error(error: PasswordHashError) -> Error {
    Error::internal(error.to_string())
}

fn invalid_credentials() -> Error {
    Error::unauthorized("invalid username or password")
}

/// Account service implementing [`UsersQuery`], [`UsersCommand`], and
/// [`LoginService`].
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenCodec>,
}

impl UserService {
    /// Build the service from its collaborators.
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenCodec>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl UsersQuery for UserService {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users.list().await.map_err(map_user_persistence_error)
    }
}

#[async_trait]
impl UsersCommand for UserService {
    async fn register(&self, registration: Registration) -> Result<User, Error> {
        let password_hash = self
            .hasher
            .hash(registration.password())
            .await
            .map_err(map_hash_error)?;
        let user = self
            .users
            .insert(NewUser {
                username: registration.username().clone(),
                name: registration.name().to_owned(),
                password_hash,
            })
            .await
            .map_err(map_user_persistence_error)?;
        info!(user_id = %user.id(), username = %user.username(), "user registered");
        Ok(user)
    }
}

#[async_trait]
impl LoginService for UserService {
    async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedToken, Error> {
        let Some(user) = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(map_user_persistence_error)?
        else {
            warn!(username = credentials.username(), "login for unknown user");
            // Spend one hashing round so unknown usernames answer as slowly
            // as wrong passwords.
            self.hasher
                .hash(credentials.password())
                .await
                .map_err(map_hash_error)?;
            return Err(invalid_credentials());
        };

        let matches = self
            .hasher
            .verify(credentials.password(), user.password_hash())
            .await
            .map_err(map_hash_error)?;
        if !matches {
            warn!(user_id = %user.id(), "login with wrong password");
            return Err(invalid_credentials());
        }

        let identity = AuthenticatedUser {
            id: *user.id(),
            username: user.username().to_string(),
        };
        let token = self
            .tokens
            .issue(&identity)
            .map_err(|err| Error::internal(err.to_string()))?;
        info!(user_id = %user.id(), "token issued");
        Ok(IssuedToken {
            token,
            username: identity.username,
            name: user.name().to_owned(),
        })
    }
}
