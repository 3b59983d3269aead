//! Phonebook contacts.

use std::fmt;

use uuid::Uuid;

/// Store-assigned contact identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Parse an identifier from its string form.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation failures for contact input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    /// Name was absent or blank.
    #[error("name missing")]
    MissingName,
    /// Number was absent or blank.
    #[error("number missing")]
    MissingNumber,
}

impl ContactValidationError {
    /// Wire name of the offending field.
    pub fn field(self) -> &'static str {
        match self {
            Self::MissingName => "name",
            Self::MissingNumber => "number",
        }
    }
}

/// Validated contact fields, used for both inserts and replacements.
///
/// # Examples
/// ```
/// use bloglist::domain::{ContactDraft, ContactValidationError};
///
/// let draft = ContactDraft::try_new(Some("Arto Hellas".into()), Some("040-1234567".into()))
///     .expect("valid contact");
/// assert_eq!(draft.name(), "Arto Hellas");
///
/// let err = ContactDraft::try_new(Some("Arto".into()), None).unwrap_err();
/// assert_eq!(err, ContactValidationError::MissingNumber);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    name: String,
    number: String,
}

impl ContactDraft {
    /// Validate raw name and number input.
    pub fn try_new(
        name: Option<String>,
        number: Option<String>,
    ) -> Result<Self, ContactValidationError> {
        let name = name
            .map(|raw| raw.trim().to_owned())
            .filter(|value| !value.is_empty())
            .ok_or(ContactValidationError::MissingName)?;
        let number = number
            .map(|raw| raw.trim().to_owned())
            .filter(|value| !value.is_empty())
            .ok_or(ContactValidationError::MissingNumber)?;
        Ok(Self { name, number })
    }

    /// Contact name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Phone number.
    pub fn number(&self) -> &str {
        self.number.as_str()
    }

    /// Materialise the stored contact under `id`.
    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            number: self.number,
        }
    }
}

/// A stored phonebook entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Store-assigned identifier.
    pub id: ContactId,
    /// Unique contact name.
    pub name: String,
    /// Phone number.
    pub number: String,
}
