//! Port contracts for author persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by author services.

pub mod lookup;
pub mod repository;

pub use lookup::AuthorNameLookup;
pub use repository::{AuthorRepository, AuthorRepositoryError, AuthorRepositoryResult};
