//! PostgreSQL-backed `ContactRepository` implementation using Diesel ORM.
//!
//! Name uniqueness is enforced by a unique index; violations surface as
//! [`ContactPersistenceError::Duplicate`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ContactPersistenceError, ContactRepository};
use crate::domain::{Contact, ContactDraft, ContactId};

use super::error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::{ContactChanges, ContactRow, NewContactRow};
use super::pool::{DbPool, PoolError};
use super::schema::contacts;

/// Diesel-backed implementation of the [`ContactRepository`] port.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ContactPersistenceError {
    ContactPersistenceError::connection(pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error, name: &str) -> ContactPersistenceError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => ContactPersistenceError::connection(message),
        DieselFailure::Query(message) => ContactPersistenceError::query(message),
        DieselFailure::UniqueViolation => ContactPersistenceError::duplicate(name),
    }
}

fn row_to_contact(row: ContactRow) -> Contact {
    Contact {
        id: ContactId::from_uuid(row.id),
        name: row.name,
        number: row.number,
    }
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn list(&self) -> Result<Vec<Contact>, ContactPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ContactRow> = contacts::table
            .order((contacts::created_at.asc(), contacts::id.asc()))
            .select(ContactRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, ""))?;
        Ok(rows.into_iter().map(row_to_contact).collect())
    }

    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, ContactPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ContactRow> = contacts::table
            .filter(contacts::id.eq(id.as_uuid()))
            .select(ContactRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, ""))?;
        Ok(row.map(row_to_contact))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, ContactPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ContactRow> = contacts::table
            .filter(contacts::name.eq(name))
            .select(ContactRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, name))?;
        Ok(row.map(row_to_contact))
    }

    async fn insert(&self, contact: ContactDraft) -> Result<Contact, ContactPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: ContactRow = diesel::insert_into(contacts::table)
            .values(NewContactRow {
                id: *ContactId::random().as_uuid(),
                name: contact.name(),
                number: contact.number(),
            })
            .returning(ContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, contact.name()))?;
        Ok(row_to_contact(row))
    }

    async fn update(&self, contact: &Contact) -> Result<bool, ContactPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let updated = diesel::update(contacts::table.filter(contacts::id.eq(contact.id.as_uuid())))
            .set(ContactChanges {
                name: &contact.name,
                number: &contact.number,
            })
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, &contact.name))?;
        Ok(updated > 0)
    }

    async fn delete(&self, id: &ContactId) -> Result<bool, ContactPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(contacts::table.filter(contacts::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, ""))?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    #[rstest]
    fn unique_violation_names_the_contact() {
        let err = map_diesel_error(
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                Box::new("duplicate key value violates unique constraint".to_owned()),
            ),
            "Arto Hellas",
        );
        assert_eq!(err, ContactPersistenceError::duplicate("Arto Hellas"));
    }
}
