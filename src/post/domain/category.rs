//! Post category.

use crate::validation::{ValidationError, rules::validate_category};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostCategory {
    /// Stored as `Fiction`.
    #[serde(rename = "Fiction")]
    Fiction,
    /// Stored as `Non-Fiction`.
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl PostCategory {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::NonFiction => "Non-Fiction",
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for PostCategory {
    type Error = ValidationError;

    /// Parses a category. Matching is exact.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate_category(value)?;
        if value == Self::Fiction.as_str() {
            Ok(Self::Fiction)
        } else {
            Ok(Self::NonFiction)
        }
    }
}
