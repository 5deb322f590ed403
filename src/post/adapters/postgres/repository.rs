//! `PostgreSQL` repository implementation for posts.

use super::{
    models::{NewPostRow, PostChangeset, PostRow},
    schema::posts,
};
use crate::post::{
    domain::{
        NewPost, PersistedPostData, Post, PostCategory, PostContent, PostId, PostSummary,
        PostTitle,
    },
    ports::{PostRepository, PostRepositoryError, PostRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by post adapters.
pub type PostPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed post repository.
#[derive(Debug, Clone)]
pub struct PostgresPostRepository {
    pool: PostPgPool,
}

impl PostgresPostRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PostPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> PostRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> PostRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(PostRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(PostRepositoryError::persistence)?
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: &NewPost) -> PostRepositoryResult<Post> {
        let row = NewPostRow {
            title: post.title().as_str().to_owned(),
            content: post.content().map(|content| content.as_str().to_owned()),
            summary: post.summary().map(|summary| summary.as_str().to_owned()),
            category: post.category().as_str().to_owned(),
        };

        self.run_blocking(move |connection| {
            let stored = diesel::insert_into(posts::table)
                .values(&row)
                .returning(PostRow::as_returning())
                .get_result::<PostRow>(connection)
                .map_err(PostRepositoryError::persistence)?;
            row_to_post(stored)
        })
        .await
    }

    async fn update(&self, post: &Post) -> PostRepositoryResult<Post> {
        let post_id = post.id();
        let changeset = PostChangeset {
            title: post.title().as_str().to_owned(),
            content: post.content().map(|content| content.as_str().to_owned()),
            summary: post.summary().map(|summary| summary.as_str().to_owned()),
            category: post.category().as_str().to_owned(),
        };

        self.run_blocking(move |connection| {
            let stored = diesel::update(posts::table.find(post_id.into_inner()))
                .set(&changeset)
                .returning(PostRow::as_returning())
                .get_result::<PostRow>(connection)
                .optional()
                .map_err(PostRepositoryError::persistence)?
                .ok_or(PostRepositoryError::NotFound(post_id))?;
            row_to_post(stored)
        })
        .await
    }

    async fn delete(&self, id: PostId) -> PostRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(posts::table.find(id.into_inner()))
                .execute(connection)
                .map_err(PostRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(PostRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: PostId) -> PostRepositoryResult<Option<Post>> {
        self.run_blocking(move |connection| {
            let row = posts::table
                .find(id.into_inner())
                .select(PostRow::as_select())
                .first::<PostRow>(connection)
                .optional()
                .map_err(PostRepositoryError::persistence)?;
            row.map(row_to_post).transpose()
        })
        .await
    }

    async fn list_all(&self) -> PostRepositoryResult<Vec<Post>> {
        self.run_blocking(move |connection| {
            let rows = posts::table
                .order(posts::id.asc())
                .select(PostRow::as_select())
                .load::<PostRow>(connection)
                .map_err(PostRepositoryError::persistence)?;
            rows.into_iter().map(row_to_post).collect()
        })
        .await
    }

    async fn list_by_category(&self, category: PostCategory) -> PostRepositoryResult<Vec<Post>> {
        self.run_blocking(move |connection| {
            let rows = posts::table
                .filter(posts::category.eq(category.as_str()))
                .order(posts::id.asc())
                .select(PostRow::as_select())
                .load::<PostRow>(connection)
                .map_err(PostRepositoryError::persistence)?;
            rows.into_iter().map(row_to_post).collect()
        })
        .await
    }
}

fn row_to_post(row: PostRow) -> PostRepositoryResult<Post> {
    let PostRow {
        id,
        title,
        content,
        summary,
        category,
        created_at,
        updated_at,
    } = row;

    let parsed_category = PostCategory::try_from(category.as_str())
        .map_err(PostRepositoryError::invalid_persisted_data)?;

    Ok(Post::from_persisted(PersistedPostData {
        id: PostId::new(id),
        title: PostTitle::from_persisted(title),
        content: content.map(PostContent::from_persisted),
        summary: summary.map(PostSummary::from_persisted),
        category: parsed_category,
        created_at,
        updated_at,
    }))
}
