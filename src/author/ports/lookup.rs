//! Name lookup capability used by the author-name uniqueness check.

use super::AuthorRepositoryResult;
use crate::author::domain::{Author, AuthorName};
use async_trait::async_trait;

/// Case-insensitive lookup of authors by name.
///
/// Kept separate from [`super::AuthorRepository`] so the uniqueness check can
/// be exercised against a mock that only answers name queries.
#[async_trait]
pub trait AuthorNameLookup: Send + Sync {
    /// Finds an author whose name equals `name` ignoring case.
    ///
    /// Returns `None` when no author matches.
    async fn find_by_name_ignore_case(
        &self,
        name: &AuthorName,
    ) -> AuthorRepositoryResult<Option<Author>>;
}
