//! Repository port for author persistence.

use super::AuthorNameLookup;
use crate::author::domain::{Author, AuthorId, AuthorName, NewAuthor};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for author repository operations.
pub type AuthorRepositoryResult<T> = Result<T, AuthorRepositoryError>;

/// Author persistence contract.
///
/// Storage owns identifiers and timestamps: `insert` assigns the id and
/// `created_at`, `update` refreshes `updated_at`.
#[async_trait]
pub trait AuthorRepository: AuthorNameLookup {
    /// Stores a new author and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorRepositoryError::DuplicateName`] when the storage
    /// layer already holds the name under any casing.
    async fn insert(&self, author: &NewAuthor) -> AuthorRepositoryResult<Author>;

    /// Persists changes to an existing author and returns the refreshed
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorRepositoryError::NotFound`] when the author does not
    /// exist or [`AuthorRepositoryError::DuplicateName`] when another author
    /// holds the new name.
    async fn update(&self, author: &Author) -> AuthorRepositoryResult<Author>;

    /// Deletes an author.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorRepositoryError::NotFound`] when the author does not
    /// exist.
    async fn delete(&self, id: AuthorId) -> AuthorRepositoryResult<()>;

    /// Finds an author by identifier.
    ///
    /// Returns `None` when the author does not exist.
    async fn find_by_id(&self, id: AuthorId) -> AuthorRepositoryResult<Option<Author>>;

    /// Returns all authors ordered by identifier.
    async fn list_all(&self) -> AuthorRepositoryResult<Vec<Author>>;
}

/// Errors returned by author repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AuthorRepositoryError {
    /// Another author already holds the name, ignoring case.
    #[error("duplicate author name: {0}")]
    DuplicateName(AuthorName),

    /// The author was not found.
    #[error("author not found: {0}")]
    NotFound(AuthorId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthorRepositoryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
