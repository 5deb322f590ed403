//! Application services for author records.

mod service;
mod uniqueness;

pub use service::{
    AuthorService, AuthorServiceError, AuthorServiceResult, CreateAuthorRequest,
};
pub use uniqueness::validate_name;
