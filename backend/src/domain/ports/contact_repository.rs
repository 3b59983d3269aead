//! Port abstraction for phonebook persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Contact, ContactDraft, ContactId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by contact repository adapters.
    pub enum ContactPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "contact repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "contact repository query failed: {message}",
        /// Another contact already uses the name.
        Duplicate { name: String } => "contact name already exists: {name}",
    }
}

/// Storage for phonebook contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Every stored contact in insertion order.
    async fn list(&self) -> Result<Vec<Contact>, ContactPersistenceError>;

    /// Fetch one contact.
    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, ContactPersistenceError>;

    /// Fetch a contact by exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, ContactPersistenceError>;

    /// Store a new contact under a freshly assigned id.
    ///
    /// Fails with [`ContactPersistenceError::Duplicate`] when the name is taken.
    async fn insert(&self, contact: ContactDraft) -> Result<Contact, ContactPersistenceError>;

    /// Replace a stored contact; `false` when the id is unknown.
    ///
    /// Fails with [`ContactPersistenceError::Duplicate`] when the new name
    /// belongs to a different contact.
    async fn update(&self, contact: &Contact) -> Result<bool, ContactPersistenceError>;

    /// Remove a contact; `false` when the id is unknown.
    async fn delete(&self, id: &ContactId) -> Result<bool, ContactPersistenceError>;
}
