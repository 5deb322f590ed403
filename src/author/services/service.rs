//! Service layer for author records.
//!
//! Provides [`AuthorService`], which validates author fields before they
//! reach the repository.

use super::validate_name;
use crate::author::{
    domain::{Author, AuthorId, AuthorName, NewAuthor, PhoneNumber},
    ports::{AuthorRepository, AuthorRepositoryError},
};
use crate::validation::{ValidationConfig, ValidationError};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAuthorRequest {
    name: String,
    phone_number: String,
}

impl CreateAuthorRequest {
    /// Creates a request from raw field values.
    #[must_use]
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }
}

/// Service-level errors for author operations.
#[derive(Debug, Error)]
pub enum AuthorServiceError {
    /// A field failed validation. Nothing was persisted.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] AuthorRepositoryError),
}

/// Result type for author service operations.
pub type AuthorServiceResult<T> = Result<T, AuthorServiceError>;

/// Author creation, mutation, and lookup service.
#[derive(Clone)]
pub struct AuthorService<R>
where
    R: AuthorRepository,
{
    repository: Arc<R>,
    config: ValidationConfig,
}

impl<R> AuthorService<R>
where
    R: AuthorRepository,
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

    /// Validates and stores a new author.
    ///
    /// The name is checked before the phone number.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorServiceError::Validation`] when a field is invalid or
    /// the name is taken, or [`AuthorServiceError::Repository`] when storage
    /// fails.
    pub async fn create(&self, request: CreateAuthorRequest) -> AuthorServiceResult<Author> {
        let CreateAuthorRequest { name, phone_number } = request;

        let author_name = log_rejection(validate_name(&*self.repository, name, None).await)?;
        let phone = log_rejection(
            PhoneNumber::new(phone_number, &self.config).map_err(AuthorServiceError::from),
        )?;

        let author = self
            .repository
            .insert(&NewAuthor::new(author_name, phone))
            .await
            .map_err(into_service_error)?;
        tracing::info!(
            author_id = %author.id(),
            author_name = %author.name(),
            "author created"
        );
        Ok(author)
    }

    /// Renames an author.
    ///
    /// Renaming to the author's current name under a different casing is
    /// allowed.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorServiceError::Validation`] when the name is blank or
    /// held by another author, or [`AuthorServiceError::Repository`] when the
    /// author does not exist or storage fails.
    pub async fn rename(
        &self,
        id: AuthorId,
        name: impl Into<String>,
    ) -> AuthorServiceResult<Author> {
        let mut author = self.find_by_id_or_error(id).await?;
        let author_name = log_rejection(validate_name(&*self.repository, name, Some(id)).await)?;
        author.set_name(author_name);
        self.save(&author).await
    }

    /// Replaces an author's phone number.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorServiceError::Validation`] when the phone number is
    /// invalid, or [`AuthorServiceError::Repository`] when the author does
    /// not exist or storage fails.
    pub async fn change_phone_number(
        &self,
        id: AuthorId,
        phone_number: impl Into<String>,
    ) -> AuthorServiceResult<Author> {
        let mut author = self.find_by_id_or_error(id).await?;
        let phone = log_rejection(
            PhoneNumber::new(phone_number, &self.config).map_err(AuthorServiceError::from),
        )?;
        author.set_phone_number(phone);
        self.save(&author).await
    }

    /// Deletes an author. No validation runs on delete.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorServiceError::Repository`] when the author does not
    /// exist or storage fails.
    pub async fn delete(&self, id: AuthorId) -> AuthorServiceResult<()> {
        self.repository.delete(id).await?;
        tracing::info!(author_id = %id, "author deleted");
        Ok(())
    }

    /// Finds an author by identifier.
    ///
    /// Returns `Ok(None)` when no author has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: AuthorId) -> AuthorServiceResult<Option<Author>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Finds an author by name, ignoring case.
    ///
    /// Returns `Ok(None)` when no author has the given name.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorServiceError::Validation`] when the name is blank, or
    /// [`AuthorServiceError::Repository`] when persistence lookup fails.
    pub async fn find_by_name(&self, name: &str) -> AuthorServiceResult<Option<Author>> {
        let author_name = AuthorName::new(name)?;
        Ok(self.repository.find_by_name_ignore_case(&author_name).await?)
    }

    /// Returns all authors.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_all(&self) -> AuthorServiceResult<Vec<Author>> {
        Ok(self.repository.list_all().await?)
    }

    async fn save(&self, author: &Author) -> AuthorServiceResult<Author> {
        let saved = self
            .repository
            .update(author)
            .await
            .map_err(into_service_error)?;
        tracing::info!(author_id = %saved.id(), "author updated");
        Ok(saved)
    }

    async fn find_by_id_or_error(&self, id: AuthorId) -> AuthorServiceResult<Author> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AuthorRepositoryError::NotFound(id).into())
    }
}

/// Maps a storage-level name collision onto the validation error callers
/// already handle for names caught by the lookup.
fn into_service_error(err: AuthorRepositoryError) -> AuthorServiceError {
    match err {
        AuthorRepositoryError::DuplicateName(name) => {
            ValidationError::DuplicateAuthorName(name.as_str().to_owned()).into()
        }
        other => AuthorServiceError::Repository(other),
    }
}

fn log_rejection<T>(result: AuthorServiceResult<T>) -> AuthorServiceResult<T> {
    if let Err(AuthorServiceError::Validation(err)) = &result {
        tracing::warn!(error = %err, "author rejected by validation");
    }
    result
}
