//! Storage adapters for author records.

pub mod memory;
pub mod postgres;
