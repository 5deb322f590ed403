//! Given steps for post publishing BDD scenarios.

use super::world::PostWorld;
use blogrecords::post::services::CreatePostRequest;
use rstest_bdd_macros::given;

#[given(r#"a draft titled "{title}" in category "{category}""#)]
fn a_draft_titled(world: &mut PostWorld, title: String, category: String) {
    world.draft = Some(CreatePostRequest::new(title, category));
}

#[given("the draft has {length:usize} characters of content")]
fn draft_has_content(world: &mut PostWorld, length: usize) -> Result<(), eyre::Report> {
    world.edit_draft(|draft| draft.with_content("c".repeat(length)))
}

#[given("the draft has a {length:usize} character summary")]
fn draft_has_summary(world: &mut PostWorld, length: usize) -> Result<(), eyre::Report> {
    world.edit_draft(|draft| draft.with_summary("s".repeat(length)))
}
