//! Contact records as exchanged with the server.

use serde::{Deserialize, Serialize};

/// A stored contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Server-assigned identifier.
    pub id: String,
    /// Display name, unique across the phonebook.
    pub name: String,
    /// Free-form phone number.
    pub number: String,
}

/// Body for create and replace requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    /// Display name.
    pub name: String,
    /// Phone number.
    pub number: String,
}

impl NewContact {
    /// Pair a name with a number.
    #[must_use]
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }
}
