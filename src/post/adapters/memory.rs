//! In-memory post repository.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::post::{
    domain::{NewPost, PersistedPostData, Post, PostCategory, PostId},
    ports::{PostRepository, PostRepositoryError, PostRepositoryResult},
};

/// Thread-safe in-memory post repository.
///
/// Identifiers are assigned sequentially from 1; timestamps come from the
/// injected clock.
#[derive(Debug, Clone)]
pub struct InMemoryPostRepository<C: Clock + Send + Sync> {
    state: Arc<RwLock<PostStore>>,
    clock: C,
}

#[derive(Debug, Default)]
struct PostStore {
    posts: BTreeMap<PostId, Post>,
    last_id: i64,
}

impl<C: Clock + Send + Sync> InMemoryPostRepository<C> {
    /// Creates an empty repository with the given clock.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            state: Arc::new(RwLock::new(PostStore::default())),
            clock,
        }
    }

    /// Returns the number of stored posts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state
            .read()
            .map(|guard| guard.posts.len())
            .unwrap_or(0)
    }

    /// Returns `true` if no posts are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock_error(err: impl std::fmt::Display) -> PostRepositoryError {
    PostRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<C: Clock + Send + Sync> PostRepository for InMemoryPostRepository<C> {
    async fn insert(&self, post: &NewPost) -> PostRepositoryResult<Post> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_id += 1;
        let id = PostId::new(state.last_id);

        let stored = Post::from_persisted(PersistedPostData {
            id,
            title: post.title().clone(),
            content: post.content().cloned(),
            summary: post.summary().cloned(),
            category: post.category(),
            created_at: self.clock.utc(),
            updated_at: None,
        });
        state.posts.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, post: &Post) -> PostRepositoryResult<Post> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.posts.contains_key(&post.id()) {
            return Err(PostRepositoryError::NotFound(post.id()));
        }

        let mut stored = post.clone();
        stored.touch(self.clock.utc());
        state.posts.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: PostId) -> PostRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(PostRepositoryError::NotFound(id))
    }

    async fn find_by_id(&self, id: PostId) -> PostRepositoryResult<Option<Post>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.posts.get(&id).cloned())
    }

    async fn list_all(&self) -> PostRepositoryResult<Vec<Post>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.posts.values().cloned().collect())
    }

    async fn list_by_category(&self, category: PostCategory) -> PostRepositoryResult<Vec<Post>> {
        let state = self.state.read().map_err(lock_error)?;
        let matching = state
            .posts
            .values()
            .filter(|post| post.category() == category)
            .cloned()
            .collect();
        Ok(matching)
    }
}
