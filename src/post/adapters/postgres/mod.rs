//! `PostgreSQL` adapters for post persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostPgPool, PostgresPostRepository};
