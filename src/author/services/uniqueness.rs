//! Author-name validation including the uniqueness lookup.

use super::{AuthorServiceError, AuthorServiceResult};
use crate::author::{
    domain::{AuthorId, AuthorName},
    ports::AuthorNameLookup,
};
use crate::validation::ValidationError;

/// Validates an author name for a create (`current` is `None`) or a rename
/// (`current` is the author's own id).
///
/// The name must be non-blank and no other author may hold it under any
/// casing. The lookup is a plain read: two concurrent callers can both pass
/// this check, so storage must also enforce the constraint.
///
/// # Errors
///
/// Returns [`AuthorServiceError::Validation`] with
/// [`ValidationError::EmptyAuthorName`] or
/// [`ValidationError::DuplicateAuthorName`], or
/// [`AuthorServiceError::Repository`] when the lookup fails.
pub async fn validate_name<L>(
    lookup: &L,
    raw_name: impl Into<String>,
    current: Option<AuthorId>,
) -> AuthorServiceResult<AuthorName>
where
    L: AuthorNameLookup + ?Sized,
{
    let name = AuthorName::new(raw_name)?;
    let existing = lookup.find_by_name_ignore_case(&name).await?;

    match existing {
        Some(author) if Some(author.id()) != current => {
            tracing::debug!(
                author_name = %name,
                existing_id = %author.id(),
                "author name already taken"
            );
            Err(AuthorServiceError::Validation(
                ValidationError::DuplicateAuthorName(name.as_str().to_owned()),
            ))
        }
        _ => Ok(name),
    }
}
