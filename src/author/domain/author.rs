//! Author record types.

use super::{AuthorId, AuthorName, PhoneNumber};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An author that has not been stored yet.
///
/// Storage assigns the identifier and creation timestamp on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAuthor {
    name: AuthorName,
    phone_number: PhoneNumber,
}

impl NewAuthor {
    /// Creates an unsaved author from validated fields.
    #[must_use]
    pub const fn new(name: AuthorName, phone_number: PhoneNumber) -> Self {
        Self { name, phone_number }
    }

    /// Returns the author name.
    #[must_use]
    pub const fn name(&self) -> &AuthorName {
        &self.name
    }

    /// Returns the phone number.
    #[must_use]
    pub const fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }
}

/// A stored author record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    id: AuthorId,
    name: AuthorName,
    phone_number: PhoneNumber,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a stored author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAuthorData {
    /// Storage-assigned identifier.
    pub id: AuthorId,
    /// Stored name.
    pub name: AuthorName,
    /// Stored phone number.
    pub phone_number: PhoneNumber,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the latest update, if any.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Author {
    /// Reconstructs an author from storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAuthorData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            phone_number: data.phone_number,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the author identifier.
    #[must_use]
    pub const fn id(&self) -> AuthorId {
        self.id
    }

    /// Returns the author name.
    #[must_use]
    pub const fn name(&self) -> &AuthorName {
        &self.name
    }

    /// Returns the phone number.
    #[must_use]
    pub const fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest update, if the record was ever
    /// updated.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Replaces the name. Uniqueness is checked by the caller.
    pub fn set_name(&mut self, name: AuthorName) {
        self.name = name;
    }

    /// Replaces the phone number.
    pub fn set_phone_number(&mut self, phone_number: PhoneNumber) {
        self.phone_number = phone_number;
    }

    /// Records an update at the given time.
    pub(crate) const fn touch(&mut self, timestamp: DateTime<Utc>) {
        self.updated_at = Some(timestamp);
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Author(id={}, name={})", self.id, self.name)
    }
}
