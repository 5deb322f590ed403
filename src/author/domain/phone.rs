//! Validated author phone number type.

use crate::validation::{
    ValidationConfig, ValidationResult,
    rules::{phone_digits, validate_phone_number},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phone number that reduces to the configured number of digits.
///
/// The original input, punctuation included, is what gets stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Creates a validated phone number.
    ///
    /// # Errors
    ///
    /// Returns [`crate::validation::ValidationError::InvalidPhoneNumber`]
    /// when the input does not contain exactly
    /// [`ValidationConfig::phone_number_digits`] digits.
    pub fn new(value: impl Into<String>, config: &ValidationConfig) -> ValidationResult<Self> {
        let raw = value.into();
        validate_phone_number(&raw, config)?;
        Ok(Self(raw))
    }

    /// Rebuilds a phone number that was validated before it was stored.
    pub(crate) const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the phone number as originally entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns only the digits, e.g. `5551234567` for `(555) 123-4567`.
    #[must_use]
    pub fn digits(&self) -> String {
        phone_digits(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
