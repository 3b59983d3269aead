//! Driving port for reading the phonebook.

use async_trait::async_trait;

use crate::domain::{Contact, ContactId, Error};

/// Domain use-case port for phonebook reads.
#[async_trait]
pub trait ContactsQuery: Send + Sync {
    /// Every contact.
    async fn list_contacts(&self) -> Result<Vec<Contact>, Error>;

    /// One contact; `NotFound` when absent.
    async fn get_contact(&self, id: &ContactId) -> Result<Contact, Error>;
}
