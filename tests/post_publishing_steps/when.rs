//! When steps for post publishing BDD scenarios.

use super::world::{PostWorld, run_async};
use rstest_bdd_macros::when;

#[when("the draft is published")]
fn publish_draft(world: &mut PostWorld) -> Result<(), eyre::Report> {
    let draft = world
        .draft
        .clone()
        .ok_or_else(|| eyre::eyre!("no draft in scenario world"))?;
    world.last_publish_result = Some(run_async(world.service.create(draft)));
    Ok(())
}
