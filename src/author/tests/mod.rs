//! Unit tests for the author bounded context.
