//! Validated author name type.

use crate::validation::{ValidationResult, rules::validate_author_name};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-blank author name.
///
/// The name is stored exactly as given. Uniqueness is compared on
/// [`AuthorName::folded`], which lower-cases the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorName(String);

impl AuthorName {
    /// Creates a validated author name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::validation::ValidationError::EmptyAuthorName`] when
    /// the value is empty after trimming.
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let raw = value.into();
        validate_author_name(&raw)?;
        Ok(Self(raw))
    }

    /// Returns the name as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the lower-cased key used for case-insensitive comparison.
    #[must_use]
    pub fn folded(&self) -> String {
        self.0.to_lowercase()
    }

    /// Returns `true` when both names are equal ignoring case.
    #[must_use]
    pub fn eq_ignore_case(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

impl AsRef<str> for AuthorName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
