//! Phonebook use-cases backed by the contact repository.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use super::ports::{ContactPersistenceError, ContactRepository, ContactsCommand, ContactsQuery};
use super::{Contact, ContactDraft, ContactId, Error};

fn map_contact_persistence_error(error: ContactPersistenceError) -> Error {
    match error {
        ContactPersistenceError::Connection { message } => Error::service_unavailable(message),
        ContactPersistenceError::Query { message } => Error::internal(message),
        ContactPersistenceError::Duplicate { name } => {
            Error::conflict("name must be unique").with_details(serde_json::json!({
                "field": "name",
                "value": name,
                "code": "duplicate_name",
            }))
        }
    }
}

fn contact_not_found(id: &ContactId) -> Error {
    Error::not_found(format!("contact {id} not found"))
}

/// Phonebook service implementing [`ContactsQuery`] and [`ContactsCommand`].
#[derive(Clone)]
pub struct ContactService {
    contacts: Arc<dyn ContactRepository>,
}

impl ContactService {
    /// Build the service over a contact repository.
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }
}

#[async_trait]
impl ContactsQuery for ContactService {
    async fn list_contacts(&self) -> Result<Vec<Contact>, Error> {
        self.contacts
            .list()
            .await
            .map_err(map_contact_persistence_error)
    }

    async fn get_contact(&self, id: &ContactId) -> Result<Contact, Error> {
        self.contacts
            .find_by_id(id)
            .await
            .map_err(map_contact_persistence_error)?
            .ok_or_else(|| contact_not_found(id))
    }
}

#[async_trait]
impl ContactsCommand for ContactService {
    async fn create_contact(&self, draft: ContactDraft) -> Result<Contact, Error> {
        let existing = self
            .contacts
            .find_by_name(draft.name())
            .await
            .map_err(map_contact_persistence_error)?;
        if let Some(existing) = existing {
            warn!(contact_id = %existing.id, "contact name already taken");
            return Err(map_contact_persistence_error(
                ContactPersistenceError::duplicate(existing.name),
            ));
        }

        let contact = self
            .contacts
            .insert(draft)
            .await
            .map_err(map_contact_persistence_error)?;
        info!(contact_id = %contact.id, "contact created");
        Ok(contact)
    }

    async fn update_contact(&self, id: &ContactId, draft: ContactDraft) -> Result<Contact, Error> {
        let contact = draft.into_contact(*id);
        let found = self
            .contacts
            .update(&contact)
            .await
            .map_err(map_contact_persistence_error)?;
        if !found {
            return Err(contact_not_found(id));
        }
        Ok(contact)
    }

    async fn delete_contact(&self, id: &ContactId) -> Result<(), Error> {
        let removed = self
            .contacts
            .delete(id)
            .await
            .map_err(map_contact_persistence_error)?;
        if !removed {
            return Err(contact_not_found(id));
        }
        info!(contact_id = %id, "contact deleted");
        Ok(())
    }
}
