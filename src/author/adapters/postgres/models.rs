//! Diesel row models for author persistence.

use super::schema::authors;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for author records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = authors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AuthorRow {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Author name.
    pub name: String,
    /// Phone number as entered.
    pub phone_number: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert model for author records. The id and timestamps are left to the
/// database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = authors)]
pub struct NewAuthorRow {
    /// Author name.
    pub name: String,
    /// Phone number as entered.
    pub phone_number: String,
}

/// Changeset applied when an author is updated.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = authors)]
pub struct AuthorChangeset {
    /// Author name.
    pub name: String,
    /// Phone number as entered.
    pub phone_number: String,
}
