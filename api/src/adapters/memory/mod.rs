//! In-memory adapters

pub mod catalog;

pub use catalog::InMemoryItemCatalog;
