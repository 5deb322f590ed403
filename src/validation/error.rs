//! The validation error raised when a field value breaks its constraint.

use thiserror::Error;

/// Errors returned when a record field fails validation.
///
/// The `Display` text is the human-readable message callers surface to
/// users.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The author name is empty after trimming.
    #[error("author must have a non-empty name")]
    EmptyAuthorName,

    /// Another author already uses this name, ignoring case.
    #[error("another author with the name '{0}' already exists")]
    DuplicateAuthorName(String),

    /// The phone number does not reduce to the required number of digits.
    #[error("author phone number must contain exactly {expected} digits, found {actual}")]
    InvalidPhoneNumber {
        /// Required digit count.
        expected: usize,
        /// Digits found in the input.
        actual: usize,
    },

    /// The post title contains none of the required marker phrases.
    #[error("post title must contain one of the clickbait phrases: {}", .0.join(", "))]
    MissingClickbaitPhrase(Vec<String>),

    /// The post content is present but shorter than the minimum.
    #[error("post content must be at least {min} characters long, got {actual}")]
    ContentTooShort {
        /// Minimum character count.
        min: usize,
        /// Character count of the rejected content.
        actual: usize,
    },

    /// The post summary is longer than the maximum.
    #[error("post summary must be at most {max} characters long, got {actual}")]
    SummaryTooLong {
        /// Maximum character count.
        max: usize,
        /// Character count of the rejected summary.
        actual: usize,
    },

    /// The post category is not one of the supported values.
    #[error("post category must be either 'Fiction' or 'Non-Fiction', got '{0}'")]
    InvalidCategory(String),
}
