//! Unit tests for the post bounded context.
