//! Step definitions for author registration scenarios.

mod given;
