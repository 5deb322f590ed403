//! Diesel row models for post persistence.

use super::schema::posts;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for post records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PostRow {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Optional body.
    pub content: Option<String>,
    /// Optional summary.
    pub summary: Option<String>,
    /// Category label.
    pub category: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert model for post records. The id and timestamps are left to the
/// database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = posts)]
pub struct NewPostRow {
    /// Title.
    pub title: String,
    /// Optional body.
    pub content: Option<String>,
    /// Optional summary.
    pub summary: Option<String>,
    /// Category label.
    pub category: String,
}

/// Changeset applied when a post is updated.
///
/// `treat_none_as_null` lets an update clear the body or summary.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = posts)]
#[diesel(treat_none_as_null = true)]
pub struct PostChangeset {
    /// Title.
    pub title: String,
    /// Optional body.
    pub content: Option<String>,
    /// Optional summary.
    pub summary: Option<String>,
    /// Category label.
    pub category: String,
}
