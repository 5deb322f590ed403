//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use blogrecords::{
    author::{adapters::memory::InMemoryAuthorRepository, services::AuthorService},
    post::{adapters::memory::InMemoryPostRepository, services::PostService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Author service backed by an in-memory repository.
pub type TestAuthorService = AuthorService<InMemoryAuthorRepository<DefaultClock>>;

/// Post service backed by an in-memory repository.
pub type TestPostService = PostService<InMemoryPostRepository<DefaultClock>>;

/// Provides an author service over an empty repository.
#[fixture]
pub fn author_service() -> TestAuthorService {
    AuthorService::new(Arc::new(InMemoryAuthorRepository::new(DefaultClock)))
}

/// Provides a post service over an empty repository.
#[fixture]
pub fn post_service() -> TestPostService {
    PostService::new(Arc::new(InMemoryPostRepository::new(DefaultClock)))
}

/// Returns `count` characters of filler text.
#[must_use]
pub fn filler(count: usize) -> String {
    "lorem ".chars().cycle().take(count).collect()
}
