//! Shared helpers for `PostgreSQL` integration tests.

use blogrecords::{
    author::adapters::postgres::{AuthorPgPool, PostgresAuthorRepository},
    post::adapters::postgres::{PostPgPool, PostgresPostRepository},
};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use pg_embedded_setup_unpriv::TestCluster;
use tokio::runtime::Runtime;

/// Boxed error type for fallible setup helpers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Schema migration applied to the template database.
pub const MIGRATION_SQL: &str =
    include_str!("../../migrations/2026-10-17-000000_create_authors_and_posts/up.sql");

/// Template database name for the pre-migrated schema.
pub const TEMPLATE_DB: &str = "blogrecords_test_template";

/// Creates a tokio runtime for driving the async repositories.
pub fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

/// Ensures the template database exists with the migration applied.
///
/// # Errors
///
/// Returns an error if template creation or migration fails.
pub fn ensure_template(cluster: &TestCluster) -> Result<(), BoxError> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
            // The migration defines a plpgsql function, so it is sent as one batch.
            conn.batch_execute(MIGRATION_SQL)
                .map_err(|e| eyre::eyre!("migration failed: {e}"))?;
            Ok(())
        })
        .map_err(|e| Box::new(e) as BoxError)?;
    Ok(())
}

/// Returns a fresh database name with the given prefix.
pub fn database_name(prefix: &str) -> String {
    format!("{prefix}_{}", uuid::Uuid::new_v4().simple())
}

/// Creates a database from the template and returns a pool for it.
///
/// # Errors
///
/// Returns an error if database creation or pool construction fails.
pub fn create_pool(
    cluster: &TestCluster,
    db_name: &str,
) -> Result<Pool<ConnectionManager<PgConnection>>, BoxError> {
    cluster
        .create_database_from_template(db_name, TEMPLATE_DB)
        .map_err(|e| Box::new(e) as BoxError)?;
    let url = cluster.connection().database_url(db_name);
    let manager = ConnectionManager::<PgConnection>::new(url);
    Pool::builder()
        .max_size(2)
        .build(manager)
        .map_err(|e| Box::new(e) as BoxError)
}

/// Both repositories over one temporary database.
pub struct Repositories {
    /// Author adapter under test.
    pub authors: PostgresAuthorRepository,
    /// Post adapter under test.
    pub posts: PostgresPostRepository,
    /// Pool for issuing raw SQL alongside the adapters.
    pub pool: AuthorPgPool,
}

/// Creates a temporary database and builds both repositories over it.
///
/// # Errors
///
/// Returns an error if template setup or database creation fails.
pub fn setup_repositories(cluster: &TestCluster, db_name: &str) -> Result<Repositories, BoxError> {
    ensure_template(cluster)?;
    let pool = create_pool(cluster, db_name)?;
    let post_pool: PostPgPool = pool.clone();
    Ok(Repositories {
        authors: PostgresAuthorRepository::new(pool.clone()),
        posts: PostgresPostRepository::new(post_pool),
        pool,
    })
}

/// Runs raw SQL against the test database.
///
/// # Errors
///
/// Returns the Diesel error when the statement fails.
pub fn execute_sql(pool: &AuthorPgPool, sql: &str) -> Result<usize, diesel::result::Error> {
    let mut conn = pool
        .get()
        .map_err(|e| diesel::result::Error::QueryBuilderError(Box::new(e)))?;
    diesel::sql_query(sql).execute(&mut conn)
}

/// Guard that drops the test database even if the test panics.
pub struct CleanupGuard<'a> {
    cluster: &'a TestCluster,
    db_name: String,
}

impl<'a> CleanupGuard<'a> {
    /// Registers `db_name` for removal when the guard drops.
    pub const fn new(cluster: &'a TestCluster, db_name: String) -> Self {
        Self { cluster, db_name }
    }
}

impl Drop for CleanupGuard<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.cluster.drop_database(self.db_name.as_str()) {
            eprintln!("Warning: failed to drop test database {}: {e}", self.db_name);
        }
    }
}
