//! Request extractors
//!
//! Wrappers around axum's extractors that report failures as structured
//! validation errors, plus cookie access.

pub mod cookies;
pub mod validated;

pub use cookies::Cookies;
pub use validated::{lenient_bool, ValidJson, ValidPath, ValidQuery};
