//! Item catalog port
//!
//! The read-only item store behind the listing and lookup routes.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::entities::ItemListing;
use crate::error::DomainError;

/// The fields of a stored item exactly as they were recorded.
///
/// Kept as a raw object so that response shaping can tell which fields
/// were set explicitly.
pub type CatalogRecord = Map<String, Value>;

/// Read access to the item catalog
#[async_trait]
pub trait ItemCatalog: Send + Sync {
    /// Page through the listing, `skip` entries in, at most `limit` long
    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<ItemListing>, DomainError>;

    /// Find a stored item by key
    async fn find(&self, key: &str) -> Result<Option<CatalogRecord>, DomainError>;

    /// The items shown on the catalog front page
    async fn featured(&self) -> Result<Vec<CatalogRecord>, DomainError>;
}
