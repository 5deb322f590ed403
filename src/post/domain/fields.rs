//! Validated post text fields.

use crate::validation::{
    ValidationConfig, ValidationResult,
    rules::{validate_content, validate_summary, validate_title},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Post title containing at least one marker phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostTitle(String);

impl PostTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`crate::validation::ValidationError::MissingClickbaitPhrase`]
    /// when the title contains none of the configured phrases.
    ///
    /// # Examples
    ///
    /// ```
    /// use blogrecords::post::domain::PostTitle;
    /// use blogrecords::validation::ValidationConfig;
    ///
    /// let config = ValidationConfig::default();
    /// assert!(PostTitle::new("Top 10 Secrets", &config).is_ok());
    /// assert!(PostTitle::new("My Day", &config).is_err());
    /// ```
    pub fn new(value: impl Into<String>, config: &ValidationConfig) -> ValidationResult<Self> {
        let raw = value.into();
        validate_title(&raw, config)?;
        Ok(Self(raw))
    }

    pub(crate) const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the title.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Post body. Empty, or at least the configured minimum length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostContent(String);

impl PostContent {
    /// Creates validated content.
    ///
    /// # Errors
    ///
    /// Returns [`crate::validation::ValidationError::ContentTooShort`] when
    /// the content is non-empty and shorter than
    /// [`ValidationConfig::min_content_chars`].
    pub fn new(value: impl Into<String>, config: &ValidationConfig) -> ValidationResult<Self> {
        let raw = value.into();
        validate_content(&raw, config)?;
        Ok(Self(raw))
    }

    pub(crate) const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the content.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Post summary no longer than the configured maximum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostSummary(String);

impl PostSummary {
    /// Creates a validated summary.
    ///
    /// # Errors
    ///
    /// Returns [`crate::validation::ValidationError::SummaryTooLong`] when
    /// the summary exceeds [`ValidationConfig::max_summary_chars`].
    pub fn new(value: impl Into<String>, config: &ValidationConfig) -> ValidationResult<Self> {
        let raw = value.into();
        validate_summary(&raw, config)?;
        Ok(Self(raw))
    }

    pub(crate) const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the summary.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl AsRef<str> for $ty {
                fn as_ref(&self) -> &str {
                    self.as_str()
                }
            }
        )+
    };
}

display_as_str!(PostTitle, PostContent, PostSummary);
