//! In-memory phonebook store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{ContactPersistenceError, ContactRepository};
use crate::domain::{Contact, ContactDraft, ContactId};

/// Contact repository backed by a locked vector.
///
/// Names are unique; collisions fail with
/// [`ContactPersistenceError::Duplicate`].
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list(&self) -> Result<Vec<Contact>, ContactPersistenceError> {
        Ok(self.contacts.read().await.clone())
    }

    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, ContactPersistenceError> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().find(|contact| contact.id == *id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, ContactPersistenceError> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().find(|contact| contact.name == name).cloned())
    }

    async fn insert(&self, contact: ContactDraft) -> Result<Contact, ContactPersistenceError> {
        let mut contacts = self.contacts.write().await;
        if contacts.iter().any(|stored| stored.name == contact.name()) {
            return Err(ContactPersistenceError::duplicate(contact.name()));
        }
        let stored = contact.into_contact(ContactId::random());
        contacts.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, contact: &Contact) -> Result<bool, ContactPersistenceError> {
        let mut contacts = self.contacts.write().await;
        if contacts
            .iter()
            .any(|stored| stored.id != contact.id && stored.name == contact.name)
        {
            return Err(ContactPersistenceError::duplicate(contact.name.as_str()));
        }
        let Some(slot) = contacts.iter_mut().find(|stored| stored.id == contact.id) else {
            return Ok(false);
        };
        *slot = contact.clone();
        Ok(true)
    }

    async fn delete(&self, id: &ContactId) -> Result<bool, ContactPersistenceError> {
        let mut contacts = self.contacts.write().await;
        let before = contacts.len();
        contacts.retain(|contact| contact.id != *id);
        Ok(contacts.len() != before)
    }
}
