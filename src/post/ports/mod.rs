//! Port contracts for post persistence.

pub mod repository;

pub use repository::{PostRepository, PostRepositoryError, PostRepositoryResult};
