//! Domain model for post records.

mod category;
mod fields;
mod ids;
mod post;

pub use category::PostCategory;
pub use fields::{PostContent, PostSummary, PostTitle};
pub use ids::PostId;
pub use post::{NewPost, PersistedPostData, Post};
