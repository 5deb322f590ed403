//! Post records: a clickbait title, optional body and summary, and a
//! category.
//!
//! Laid out like [`crate::author`]: [`domain`], [`ports`], [`adapters`], and
//! [`services`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
