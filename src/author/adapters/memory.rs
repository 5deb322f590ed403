//! In-memory author repository.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::author::{
    domain::{Author, AuthorId, AuthorName, NewAuthor, PersistedAuthorData},
    ports::{AuthorNameLookup, AuthorRepository, AuthorRepositoryError, AuthorRepositoryResult},
};

/// Thread-safe in-memory author repository.
///
/// Identifiers are assigned sequentially from 1 and timestamps come from the
/// injected clock. The lower-cased name index is checked under the write
/// lock, so concurrent inserts cannot both claim a name.
#[derive(Debug, Clone)]
pub struct InMemoryAuthorRepository<C: Clock + Send + Sync> {
    state: Arc<RwLock<AuthorStore>>,
    clock: C,
}

#[derive(Debug, Default)]
struct AuthorStore {
    authors: BTreeMap<AuthorId, Author>,
    name_index: HashMap<String, AuthorId>,
    last_id: i64,
}

impl<C: Clock + Send + Sync> InMemoryAuthorRepository<C> {
    /// Creates an empty repository with the given clock.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            state: Arc::new(RwLock::new(AuthorStore::default())),
            clock,
        }
    }

    /// Returns the number of stored authors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state
            .read()
            .map(|guard| guard.authors.len())
            .unwrap_or(0)
    }

    /// Returns `true` if no authors are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock_error(err: impl std::fmt::Display) -> AuthorRepositoryError {
    AuthorRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<C: Clock + Send + Sync> AuthorNameLookup for InMemoryAuthorRepository<C> {
    async fn find_by_name_ignore_case(
        &self,
        name: &AuthorName,
    ) -> AuthorRepositoryResult<Option<Author>> {
        let state = self.state.read().map_err(lock_error)?;
        let author = state
            .name_index
            .get(&name.folded())
            .and_then(|id| state.authors.get(id))
            .cloned();
        Ok(author)
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> AuthorRepository for InMemoryAuthorRepository<C> {
    async fn insert(&self, author: &NewAuthor) -> AuthorRepositoryResult<Author> {
        let mut state = self.state.write().map_err(lock_error)?;

        let key = author.name().folded();
        if state.name_index.contains_key(&key) {
            return Err(AuthorRepositoryError::DuplicateName(author.name().clone()));
        }

        state.last_id += 1;
        let id = AuthorId::new(state.last_id);
        let stored = Author::from_persisted(PersistedAuthorData {
            id,
            name: author.name().clone(),
            phone_number: author.phone_number().clone(),
            created_at: self.clock.utc(),
            updated_at: None,
        });

        state.name_index.insert(key, id);
        state.authors.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, author: &Author) -> AuthorRepositoryResult<Author> {
        let mut state = self.state.write().map_err(lock_error)?;

        let old_key = state
            .authors
            .get(&author.id())
            .ok_or(AuthorRepositoryError::NotFound(author.id()))?
            .name()
            .folded();
        let new_key = author.name().folded();

        if new_key != old_key {
            if let Some(&indexed_id) = state.name_index.get(&new_key)
                && indexed_id != author.id()
            {
                return Err(AuthorRepositoryError::DuplicateName(author.name().clone()));
            }
            state.name_index.remove(&old_key);
            state.name_index.insert(new_key, author.id());
        }

        let mut stored = author.clone();
        stored.touch(self.clock.utc());
        state.authors.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: AuthorId) -> AuthorRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let removed = state
            .authors
            .remove(&id)
            .ok_or(AuthorRepositoryError::NotFound(id))?;
        state.name_index.remove(&removed.name().folded());
        Ok(())
    }

    async fn find_by_id(&self, id: AuthorId) -> AuthorRepositoryResult<Option<Author>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.authors.get(&id).cloned())
    }

    async fn list_all(&self) -> AuthorRepositoryResult<Vec<Author>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.authors.values().cloned().collect())
    }
}
