//! Repository port for post persistence.

use crate::post::domain::{NewPost, Post, PostCategory, PostId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for post repository operations.
pub type PostRepositoryResult<T> = Result<T, PostRepositoryError>;

/// Post persistence contract.
///
/// `insert` assigns the id and `created_at`; `update` refreshes
/// `updated_at`.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Stores a new post and returns the stored record.
    async fn insert(&self, post: &NewPost) -> PostRepositoryResult<Post>;

    /// Persists changes to an existing post and returns the refreshed record.
    ///
    /// # Errors
    ///
    /// Returns [`PostRepositoryError::NotFound`] when the post does not exist.
    async fn update(&self, post: &Post) -> PostRepositoryResult<Post>;

    /// Deletes a post.
    ///
    /// # Errors
    ///
    /// Returns [`PostRepositoryError::NotFound`] when the post does not exist.
    async fn delete(&self, id: PostId) -> PostRepositoryResult<()>;

    /// Finds a post by identifier.
    async fn find_by_id(&self, id: PostId) -> PostRepositoryResult<Option<Post>>;

    /// Returns all posts ordered by identifier.
    async fn list_all(&self) -> PostRepositoryResult<Vec<Post>>;

    /// Returns the posts in one category ordered by identifier.
    async fn list_by_category(&self, category: PostCategory) -> PostRepositoryResult<Vec<Post>>;
}

/// Errors returned by post repository implementations.
#[derive(Debug, Clone, Error)]
pub enum PostRepositoryError {
    /// The post was not found.
    #[error("post not found: {0}")]
    NotFound(PostId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PostRepositoryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
