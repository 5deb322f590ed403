//! Storage adapters for post records.

pub mod memory;
pub mod postgres;
