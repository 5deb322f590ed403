//! `PostgreSQL` adapters for author persistence.

mod models;
mod repository;
mod schema;

pub use repository::{AuthorPgPool, PostgresAuthorRepository};
