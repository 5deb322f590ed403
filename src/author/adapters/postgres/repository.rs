//! `PostgreSQL` repository implementation for authors.

use super::{
    models::{AuthorChangeset, AuthorRow, NewAuthorRow},
    schema::authors,
};
use crate::author::{
    domain::{Author, AuthorId, AuthorName, NewAuthor, PersistedAuthorData, PhoneNumber},
    ports::{AuthorNameLookup, AuthorRepository, AuthorRepositoryError, AuthorRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_types::Text;

/// Unique index closing the check-then-insert race on author names.
const NAME_UNIQUE_INDEX: &str = "idx_authors_name_lower";

diesel::define_sql_function! {
    /// SQL `lower()` for case-insensitive name matching.
    fn lower(value: Text) -> Text;
}

/// `PostgreSQL` connection pool type used by author adapters.
pub type AuthorPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed author repository.
#[derive(Debug, Clone)]
pub struct PostgresAuthorRepository {
    pool: AuthorPgPool,
}

impl PostgresAuthorRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AuthorPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AuthorRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AuthorRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AuthorRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AuthorRepositoryError::persistence)?
    }
}

#[async_trait]
impl AuthorNameLookup for PostgresAuthorRepository {
    async fn find_by_name_ignore_case(
        &self,
        name: &AuthorName,
    ) -> AuthorRepositoryResult<Option<Author>> {
        let name_str = name.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = authors::table
                .filter(lower(authors::name).eq(lower(name_str)))
                .select(AuthorRow::as_select())
                .first::<AuthorRow>(connection)
                .optional()
                .map_err(AuthorRepositoryError::persistence)?;
            row.map(row_to_author).transpose()
        })
        .await
    }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn insert(&self, author: &NewAuthor) -> AuthorRepositoryResult<Author> {
        let author_name = author.name().clone();
        let new_row = NewAuthorRow {
            name: author.name().as_str().to_owned(),
            phone_number: author.phone_number().as_str().to_owned(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(authors::table)
                .values(&new_row)
                .returning(AuthorRow::as_returning())
                .get_result::<AuthorRow>(connection)
                .map_err(|err| map_write_error(err, &author_name))?;
            row_to_author(row)
        })
        .await
    }

    async fn update(&self, author: &Author) -> AuthorRepositoryResult<Author> {
        let author_id = author.id();
        let author_name = author.name().clone();
        let changeset = AuthorChangeset {
            name: author.name().as_str().to_owned(),
            phone_number: author.phone_number().as_str().to_owned(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::update(authors::table.find(author_id.into_inner()))
                .set(&changeset)
                .returning(AuthorRow::as_returning())
                .get_result::<AuthorRow>(connection)
                .optional()
                .map_err(|err| map_write_error(err, &author_name))?
                .ok_or(AuthorRepositoryError::NotFound(author_id))?;
            row_to_author(row)
        })
        .await
    }

    async fn delete(&self, id: AuthorId) -> AuthorRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(authors::table.find(id.into_inner()))
                .execute(connection)
                .map_err(AuthorRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(AuthorRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: AuthorId) -> AuthorRepositoryResult<Option<Author>> {
        self.run_blocking(move |connection| {
            let row = authors::table
                .find(id.into_inner())
                .select(AuthorRow::as_select())
                .first::<AuthorRow>(connection)
                .optional()
                .map_err(AuthorRepositoryError::persistence)?;
            row.map(row_to_author).transpose()
        })
        .await
    }

    async fn list_all(&self) -> AuthorRepositoryResult<Vec<Author>> {
        self.run_blocking(move |connection| {
            let rows = authors::table
                .order(authors::id.asc())
                .select(AuthorRow::as_select())
                .load::<AuthorRow>(connection)
                .map_err(AuthorRepositoryError::persistence)?;
            rows.into_iter().map(row_to_author).collect()
        })
        .await
    }
}

fn map_write_error(err: DieselError, name: &AuthorName) -> AuthorRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
            if info.constraint_name() == Some(NAME_UNIQUE_INDEX) =>
        {
            AuthorRepositoryError::DuplicateName(name.clone())
        }
        _ => AuthorRepositoryError::persistence(err),
    }
}

fn row_to_author(row: AuthorRow) -> AuthorRepositoryResult<Author> {
    let AuthorRow {
        id,
        name,
        phone_number,
        created_at,
        updated_at,
    } = row;

    let parsed_name = AuthorName::new(name).map_err(AuthorRepositoryError::invalid_persisted_data)?;

    Ok(Author::from_persisted(PersistedAuthorData {
        id: AuthorId::new(id),
        name: parsed_name,
        phone_number: PhoneNumber::from_persisted(phone_number),
        created_at,
        updated_at,
    }))
}
