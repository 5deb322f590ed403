//! Then steps for post publishing BDD scenarios.

use super::world::{PostWorld, run_async};
use blogrecords::{post::services::PostServiceError, validation::ValidationError};
use rstest_bdd_macros::then;

#[then("publishing succeeds with an assigned id")]
fn publishing_succeeds(world: &PostWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_publish_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing publish result in scenario world"))?;
    let post = result
        .as_ref()
        .map_err(|err| eyre::eyre!("expected publish to succeed, got {err}"))?;
    if post.id().into_inner() < 1 {
        return Err(eyre::eyre!("expected an assigned id, got {}", post.id()));
    }
    Ok(())
}

#[then("publishing fails with a missing clickbait phrase error")]
fn publishing_fails_with_missing_phrase(world: &PostWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_publish_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing publish result in scenario world"))?;
    if !matches!(
        result,
        Err(PostServiceError::Validation(
            ValidationError::MissingClickbaitPhrase(_)
        ))
    ) {
        return Err(eyre::eyre!("expected missing phrase error, got {result:?}"));
    }
    Ok(())
}

#[then("publishing fails with an invalid category error")]
fn publishing_fails_with_invalid_category(world: &PostWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_publish_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing publish result in scenario world"))?;
    if !matches!(
        result,
        Err(PostServiceError::Validation(
            ValidationError::InvalidCategory(_)
        ))
    ) {
        return Err(eyre::eyre!("expected invalid category error, got {result:?}"));
    }
    Ok(())
}

#[then("listing all posts returns {count:usize} entries")]
fn list_all_returns_count(world: &PostWorld, count: usize) -> Result<(), eyre::Report> {
    let all =
        run_async(world.service.list_all()).map_err(|err| eyre::eyre!("list_all failed: {err}"))?;
    if all.len() != count {
        return Err(eyre::eyre!("expected {count} posts, found {}", all.len()));
    }
    Ok(())
}
