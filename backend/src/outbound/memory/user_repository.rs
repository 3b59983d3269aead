//! In-memory user store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

/// User repository backed by a locked vector.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id() == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserPersistenceError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|user| user.username().as_ref() == username)
            .cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, UserPersistenceError> {
        let mut users = self.users.write().await;
        if users.iter().any(|stored| *stored.username() == user.username) {
            return Err(UserPersistenceError::duplicate(user.username.as_ref()));
        }
        let NewUser {
            username,
            name,
            password_hash,
        } = user;
        let stored = User::new(UserId::random(), username, name, password_hash);
        users.push(stored.clone());
        Ok(stored)
    }
}
