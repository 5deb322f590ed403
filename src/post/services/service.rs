//! Service layer for post records.
//!
//! [`PostService`] validates each supplied field in declaration order
//! (title, content, summary, category) and stops at the first failure, so a
//! rejected request never reaches the repository.

use crate::post::{
    domain::{NewPost, Post, PostCategory, PostContent, PostId, PostSummary, PostTitle},
    ports::{PostRepository, PostRepositoryError},
};
use crate::validation::{ValidationConfig, ValidationError};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePostRequest {
    title: String,
    content: Option<String>,
    summary: Option<String>,
    category: String,
}

impl CreatePostRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: None,
            summary: None,
            category: category.into(),
        }
    }

    /// Sets the body.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// Request payload for changing an existing post.
///
/// Only fields that were set are validated and written. The body and
/// summary can also be cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePostRequest {
    title: Option<String>,
    content: Option<Option<String>>,
    summary: Option<Option<String>>,
    category: Option<String>,
}

impl UpdatePostRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the body.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(Some(content.into()));
        self
    }

    /// Removes the body.
    #[must_use]
    pub fn clear_content(mut self) -> Self {
        self.content = Some(None);
        self
    }

    /// Replaces the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(Some(summary.into()));
        self
    }

    /// Removes the summary.
    #[must_use]
    pub fn clear_summary(mut self) -> Self {
        self.summary = Some(None);
        self
    }

    /// Replaces the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns `true` when the request changes no field.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.summary.is_none()
            && self.category.is_none()
    }
}

/// Service-level errors for post operations.
#[derive(Debug, Error)]
pub enum PostServiceError {
    /// A field failed validation. Nothing was persisted.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] PostRepositoryError),
}

/// Result type for post service operations.
pub type PostServiceResult<T> = Result<T, PostServiceError>;

/// Post creation, mutation, and lookup service.
#[derive(Clone)]
pub struct PostService<R>
where
    R: PostRepository,
{
    repository: Arc<R>,
    config: ValidationConfig,
}

impl<R> PostService<R>
where
    R: PostRepository,
{
    /// Creates a service with the default validation rules.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_config(repository, ValidationConfig::default())
    }

    /// Creates a service with custom validation rules.
    #[must_use]
    pub const fn with_config(repository: Arc<R>, config: ValidationConfig) -> Self {
        Self { repository, config }
    }

    /// Validates and stores a new post.
    ///
    /// # Errors
    ///
    /// Returns [`PostServiceError::Validation`] for the first invalid field,
    /// or [`PostServiceError::Repository`] when storage fails.
    pub async fn create(&self, request: CreatePostRequest) -> PostServiceResult<Post> {
        let new_post = log_rejection(self.validate_new(request))?;
        let post = self.repository.insert(&new_post).await?;
        tracing::info!(post_id = %post.id(), category = %post.category(), "post created");
        Ok(post)
    }

    /// Validates and applies the fields set in `request`.
    ///
    /// An empty request returns the stored post unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PostServiceError::Validation`] for the first invalid field,
    /// or [`PostServiceError::Repository`] when the post does not exist or
    /// storage fails.
    pub async fn update(&self, id: PostId, request: UpdatePostRequest) -> PostServiceResult<Post> {
        let mut post = self.find_by_id_or_error(id).await?;
        if request.is_empty() {
            return Ok(post);
        }

        log_rejection(self.apply_update(&mut post, request))?;
        let saved = self.repository.update(&post).await?;
        tracing::info!(post_id = %saved.id(), "post updated");
        Ok(saved)
    }

    /// Deletes a post. No validation runs on delete.
    ///
    /// # Errors
    ///
    /// Returns [`PostServiceError::Repository`] when the post does not exist
    /// or storage fails.
    pub async fn delete(&self, id: PostId) -> PostServiceResult<()> {
        self.repository.delete(id).await?;
        tracing::info!(post_id = %id, "post deleted");
        Ok(())
    }

    /// Finds a post by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PostServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: PostId) -> PostServiceResult<Option<Post>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns all posts.
    ///
    /// # Errors
    ///
    /// Returns [`PostServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_all(&self) -> PostServiceResult<Vec<Post>> {
        Ok(self.repository.list_all().await?)
    }

    /// Returns the posts in a category.
    ///
    /// # Errors
    ///
    /// Returns [`PostServiceError::Validation`] when the category is unknown,
    /// or [`PostServiceError::Repository`] when persistence lookup fails.
    pub async fn list_by_category(&self, category: &str) -> PostServiceResult<Vec<Post>> {
        let parsed = PostCategory::try_from(category)?;
        Ok(self.repository.list_by_category(parsed).await?)
    }

    fn validate_new(&self, request: CreatePostRequest) -> PostServiceResult<NewPost> {
        let CreatePostRequest {
            title,
            content,
            summary,
            category,
        } = request;

        let post_title = PostTitle::new(title, &self.config)?;
        let post_content = content
            .map(|value| PostContent::new(value, &self.config))
            .transpose()?;
        let post_summary = summary
            .map(|value| PostSummary::new(value, &self.config))
            .transpose()?;
        let post_category = PostCategory::try_from(category.as_str())?;

        let mut new_post = NewPost::new(post_title, post_category);
        if let Some(body) = post_content {
            new_post = new_post.with_content(body);
        }
        if let Some(text) = post_summary {
            new_post = new_post.with_summary(text);
        }
        Ok(new_post)
    }

    fn apply_update(&self, post: &mut Post, request: UpdatePostRequest) -> PostServiceResult<()> {
        let UpdatePostRequest {
            title,
            content,
            summary,
            category,
        } = request;

        if let Some(value) = title {
            post.set_title(PostTitle::new(value, &self.config)?);
        }
        if let Some(change) = content {
            let body = change
                .map(|value| PostContent::new(value, &self.config))
                .transpose()?;
            post.set_content(body);
        }
        if let Some(change) = summary {
            let text = change
                .map(|value| PostSummary::new(value, &self.config))
                .transpose()?;
            post.set_summary(text);
        }
        if let Some(value) = category {
            post.set_category(PostCategory::try_from(value.as_str())?);
        }
        Ok(())
    }

    async fn find_by_id_or_error(&self, id: PostId) -> PostServiceResult<Post> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| PostRepositoryError::NotFound(id).into())
    }
}

fn log_rejection<T>(result: PostServiceResult<T>) -> PostServiceResult<T> {
    if let Err(PostServiceError::Validation(err)) = &result {
        tracing::warn!(error = %err, "post rejected by validation");
    }
    result
}
