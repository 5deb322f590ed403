//! Given steps for author registration BDD scenarios.

use super::world::{AuthorWorld, PendingAuthor, run_async};
use blogrecords::author::services::CreateAuthorRequest;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"an author named "{name}" with phone "{phone}""#)]
fn an_author_named(world: &mut AuthorWorld, name: String, phone: String) {
    world.pending_authors.push(PendingAuthor { name, phone });
}

#[given(r#"a registered author named "{name}" with phone "{phone}""#)]
fn registered_author_named(
    world: &mut AuthorWorld,
    name: String,
    phone: String,
) -> Result<(), eyre::Report> {
    run_async(world.service.create(CreateAuthorRequest::new(name, phone)))
        .wrap_err("register author for scenario")?;
    Ok(())
}
