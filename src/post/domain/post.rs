//! Post record types.

use super::{PostCategory, PostContent, PostId, PostSummary, PostTitle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    title: PostTitle,
    content: Option<PostContent>,
    summary: Option<PostSummary>,
    category: PostCategory,
}

impl NewPost {
    /// Creates an unsaved post with a title and category and no body or
    /// summary.
    #[must_use]
    pub const fn new(title: PostTitle, category: PostCategory) -> Self {
        Self {
            title,
            content: None,
            summary: None,
            category,
        }
    }

    /// Sets the body.
    #[must_use]
    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    /// Sets the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: PostSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &PostTitle {
        &self.title
    }

    /// Returns the body, if any.
    #[must_use]
    pub const fn content(&self) -> Option<&PostContent> {
        self.content.as_ref()
    }

    /// Returns the summary, if any.
    #[must_use]
    pub const fn summary(&self) -> Option<&PostSummary> {
        self.summary.as_ref()
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> PostCategory {
        self.category
    }
}

/// A stored post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    id: PostId,
    title: PostTitle,
    content: Option<PostContent>,
    summary: Option<PostSummary>,
    category: PostCategory,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a stored post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedPostData {
    /// Storage-assigned identifier.
    pub id: PostId,
    /// Stored title.
    pub title: PostTitle,
    /// Stored body.
    pub content: Option<PostContent>,
    /// Stored summary.
    pub summary: Option<PostSummary>,
    /// Stored category.
    pub category: PostCategory,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the latest update, if any.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Reconstructs a post from storage.
    #[must_use]
    pub fn from_persisted(data: PersistedPostData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            content: data.content,
            summary: data.summary,
            category: data.category,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the post identifier.
    #[must_use]
    pub const fn id(&self) -> PostId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &PostTitle {
        &self.title
    }

    /// Returns the body, if any.
    #[must_use]
    pub const fn content(&self) -> Option<&PostContent> {
        self.content.as_ref()
    }

    /// Returns the summary, if any.
    #[must_use]
    pub const fn summary(&self) -> Option<&PostSummary> {
        self.summary.as_ref()
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> PostCategory {
        self.category
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest update, if any.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: PostTitle) {
        self.title = title;
    }

    /// Replaces or clears the body.
    pub fn set_content(&mut self, content: Option<PostContent>) {
        self.content = content;
    }

    /// Replaces or clears the summary.
    pub fn set_summary(&mut self, summary: Option<PostSummary>) {
        self.summary = summary;
    }

    /// Replaces the category.
    pub const fn set_category(&mut self, category: PostCategory) {
        self.category = category;
    }

    pub(crate) const fn touch(&mut self, timestamp: DateTime<Utc>) {
        self.updated_at = Some(timestamp);
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Post(id={}, title={} content={}, summary={})",
            self.id,
            self.title,
            self.content.as_ref().map_or("None", PostContent::as_str),
            self.summary.as_ref().map_or("None", PostSummary::as_str),
        )
    }
}
