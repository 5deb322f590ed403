//! Domain model for author records.
//!
//! Field values are validated newtypes; infrastructure concerns such as id
//! assignment and timestamps stay with the storage adapters.

mod author;
mod ids;
mod name;
mod phone;

pub use author::{Author, NewAuthor, PersistedAuthorData};
pub use ids::AuthorId;
pub use name::AuthorName;
pub use phone::PhoneNumber;
