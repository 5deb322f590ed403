//! Field validation shared by the author and post records.
//!
//! Each rule is a pure function over the raw field value. The validated
//! newtypes in [`crate::author::domain`] and [`crate::post::domain`] can only
//! be built through these rules, so a record holding them has passed
//! validation for every field it carries.

mod config;
mod error;
pub mod rules;


pub use config::{DEFAULT_CLICKBAIT_PHRASES, ValidationConfig};
pub use error::ValidationError;

/// Result type for field validation.
pub type ValidationResult<T> = Result<T, ValidationError>;
