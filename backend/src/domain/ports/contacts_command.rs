//! Driving port for phonebook mutations.

use async_trait::async_trait;

use crate::domain::{Contact, ContactDraft, ContactId, Error};

/// Domain use-case port for phonebook writes.
#[async_trait]
pub trait ContactsCommand: Send + Sync {
    /// Add a contact; `Conflict` when the name is taken.
    async fn create_contact(&self, draft: ContactDraft) -> Result<Contact, Error>;

    /// Replace a contact's name and number; `NotFound` when absent.
    async fn update_contact(&self, id: &ContactId, draft: ContactDraft) -> Result<Contact, Error>;

    /// Remove a contact; `NotFound` when absent.
    async fn delete_contact(&self, id: &ContactId) -> Result<(), Error>;
}
