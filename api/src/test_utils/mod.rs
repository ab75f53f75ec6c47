//! Test utilities
//!
//! Fixtures and a server builder for driving lesson routers in tests.

pub mod fixtures;

pub use fixtures::*;
