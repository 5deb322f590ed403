//! Author adapter tests against `PostgreSQL`.

use std::sync::Arc;

use crate::postgres::helpers::{
    CleanupGuard, database_name, execute_sql, setup_repositories, test_runtime,
};
use blogrecords::author::{
    domain::{AuthorId, AuthorName, NewAuthor, PhoneNumber},
    ports::{AuthorNameLookup, AuthorRepository, AuthorRepositoryError},
    services::{AuthorService, AuthorServiceError, CreateAuthorRequest},
};
use blogrecords::validation::{ValidationConfig, ValidationError};
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_test_cluster};
use rstest::rstest;

fn new_author(name: &str) -> NewAuthor {
    NewAuthor::new(
        AuthorName::new(name).expect("valid name"),
        PhoneNumber::new("(555) 123-4567", &ValidationConfig::default()).expect("valid phone"),
    )
}

#[rstest]
fn insert_assigns_id_and_created_at(shared_test_cluster: &'static TestCluster) {
    let db_name = database_name("author_insert");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repos = setup_repositories(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let stored = rt
        .block_on(repos.authors.insert(&new_author("Ada Lovelace")))
        .expect("insert should succeed");
    let found = rt
        .block_on(repos.authors.find_by_id(stored.id()))
        .expect("lookup should succeed")
        .expect("author should exist");

    assert_eq!(found, stored);
    assert_eq!(found.phone_number().as_str(), "(555) 123-4567");
    assert!(found.updated_at().is_none());
}

#[rstest]
#[case("ADA LOVELACE")]
#[case("ada lovelace")]
#[case("Ada Lovelace")]
fn name_lookup_ignores_case(shared_test_cluster: &'static TestCluster, #[case] query: &str) {
    let db_name = database_name("author_lookup");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repos = setup_repositories(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let stored = rt
        .block_on(repos.authors.insert(&new_author("Ada Lovelace")))
        .expect("insert should succeed");
    let found = rt
        .block_on(
            repos
                .authors
                .find_by_name_ignore_case(&AuthorName::new(query).expect("valid name")),
        )
        .expect("lookup should succeed");

    assert_eq!(found.map(|author| author.id()), Some(stored.id()));
}

#[rstest]
fn insert_with_name_in_other_case_hits_the_unique_index(
    shared_test_cluster: &'static TestCluster,
) {
    let db_name = database_name("author_unique_insert");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repos = setup_repositories(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    rt.block_on(repos.authors.insert(&new_author("Ada Lovelace")))
        .expect("first insert should succeed");
    let result = rt.block_on(repos.authors.insert(&new_author("ADA LOVELACE")));

    assert!(
        matches!(
            &result,
            Err(AuthorRepositoryError::DuplicateName(name)) if name.as_str() == "ADA LOVELACE"
        ),
        "unexpected result: {result:?}"
    );
}

#[rstest]
fn update_to_a_taken_name_hits_the_unique_index(shared_test_cluster: &'static TestCluster) {
    let db_name = database_name("author_unique_update");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repos = setup_repositories(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    rt.block_on(repos.authors.insert(&new_author("Ada")))
        .expect("insert should succeed");
    let mut grace = rt
        .block_on(repos.authors.insert(&new_author("Grace")))
        .expect("insert should succeed");

    grace.set_name(AuthorName::new("ada").expect("valid name"));
    let result = rt.block_on(repos.authors.update(&grace));

    assert!(matches!(
        result,
        Err(AuthorRepositoryError::DuplicateName(_))
    ));
}

#[rstest]
fn update_is_stamped_by_the_trigger(shared_test_cluster: &'static TestCluster) {
    let db_name = database_name("author_trigger");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repos = setup_repositories(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let mut author = rt
        .block_on(repos.authors.insert(&new_author("Ada")))
        .expect("insert should succeed");
    author.set_name(AuthorName::new("ADA").expect("valid name"));
    let updated = rt
        .block_on(repos.authors.update(&author))
        .expect("renaming to own name in other case should succeed");

    assert_eq!(updated.name().as_str(), "ADA");
    assert_eq!(updated.created_at(), author.created_at());
    let stamped = updated.updated_at().expect("trigger should set updated_at");
    assert!(stamped >= updated.created_at());
}

#[rstest]
fn missing_author_is_not_found(shared_test_cluster: &'static TestCluster) {
    let db_name = database_name("author_missing");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repos = setup_repositories(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let author = rt
        .block_on(repos.authors.insert(&new_author("Ada")))
        .expect("insert should succeed");
    rt.block_on(repos.authors.delete(author.id()))
        .expect("delete should succeed");

    assert!(matches!(
        rt.block_on(repos.authors.delete(author.id())),
        Err(AuthorRepositoryError::NotFound(id)) if id == author.id()
    ));
    assert!(matches!(
        rt.block_on(repos.authors.update(&author)),
        Err(AuthorRepositoryError::NotFound(_))
    ));
    assert!(
        rt.block_on(repos.authors.find_by_id(AuthorId::new(999)))
            .expect("lookup should succeed")
            .is_none()
    );
}

#[rstest]
fn list_all_orders_by_id(shared_test_cluster: &'static TestCluster) {
    let db_name = database_name("author_list");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repos = setup_repositories(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    for name in ["Ada", "Grace", "Barbara"] {
        rt.block_on(repos.authors.insert(&new_author(name)))
            .expect("insert should succeed");
    }
    let names: Vec<String> = rt
        .block_on(repos.authors.list_all())
        .expect("list should succeed")
        .iter()
        .map(|author| author.name().as_str().to_owned())
        .collect();

    assert_eq!(names, ["Ada", "Grace", "Barbara"]);
}

#[rstest]
fn blank_stored_name_is_invalid_persisted_data(shared_test_cluster: &'static TestCluster) {
    let db_name = database_name("author_corrupt");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repos = setup_repositories(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    execute_sql(
        &repos.pool,
        "INSERT INTO authors (id, name, phone_number) VALUES (42, '   ', '5551234567')",
    )
    .expect("raw insert should succeed");

    let result = rt.block_on(repos.authors.find_by_id(AuthorId::new(42)));
    assert!(matches!(
        result,
        Err(AuthorRepositoryError::InvalidPersistedData(_))
    ));
}

#[rstest]
fn service_reports_duplicate_name_from_postgres(shared_test_cluster: &'static TestCluster) {
    let db_name = database_name("author_service");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repos = setup_repositories(shared_test_cluster, &db_name).expect("repository setup");
    let service = AuthorService::new(Arc::new(repos.authors.clone()));
    let rt = test_runtime();

    rt.block_on(service.create(CreateAuthorRequest::new("Ada", "555-123-4567")))
        .expect("creation should succeed");
    let result = rt.block_on(service.create(CreateAuthorRequest::new("aDA", "555-987-6543")));

    assert!(matches!(
        result,
        Err(AuthorServiceError::Validation(
            ValidationError::DuplicateAuthorName(_)
        ))
    ));
}
