//! Blogrecords: validated author and post records.
//!
//! This crate maps two record types onto storage and enforces their
//! field-level rules before anything is written: authors need a unique
//! (case-insensitive) name and a ten-digit phone number, posts need a
//! clickbait title, a long enough body, a short enough summary, and a known
//! category.
//!
//! # Architecture
//!
//! Each record type follows hexagonal architecture principles:
//!
//! - **Domain**: Validated field types and records with no infrastructure
//!   dependencies
//! - **Ports**: Abstract repository traits that storage must satisfy
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//! - **Services**: Validation-then-persist orchestration
//!
//! # Modules
//!
//! - [`validation`]: Rules, limits, and the shared validation error
//! - [`author`]: Author records and the name-uniqueness check
//! - [`post`]: Post records

pub mod author;
pub mod post;
pub mod validation;
