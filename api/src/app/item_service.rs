//! Item service
//!
//! Everything the item routes do beyond echoing their input: paging the
//! listing, pricing new items, and shaping catalog lookups.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::app::ResponseShape;
use crate::domain::entities::{CatalogItem, Item, ItemListing};
use crate::domain::ports::{CatalogRecord, ItemCatalog};
use crate::error::{AppError, DomainError};

/// A freshly submitted item, priced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedItem {
    #[serde(flatten)]
    pub item: Item,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_with_tax: Option<f64>,
}

pub struct ItemService<C: ItemCatalog> {
    catalog: Arc<C>,
}

impl<C: ItemCatalog> ItemService<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    pub async fn list(&self, skip: usize, limit: usize) -> Result<Vec<ItemListing>, AppError> {
        Ok(self.catalog.list(skip, limit).await?)
    }

    /// Attach `price_with_tax` when the item carries a non-zero tax
    pub fn price(&self, item: Item) -> PricedItem {
        let price_with_tax = item.price_with_tax();
        PricedItem {
            item,
            price_with_tax,
        }
    }

    /// Look up `key` and render it through `shape`
    pub async fn find_shaped(&self, key: &str, shape: &ResponseShape) -> Result<Value, AppError> {
        let record = self
            .catalog
            .find(key)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Item {} not found", key)))?;

        let item = to_catalog_item(&record)?;

        shape
            .apply(&item, Some(&record))
            .map_err(|e| AppError::Internal(e.to_string()))
    }

    pub async fn featured(&self) -> Result<Vec<CatalogItem>, AppError> {
        self.catalog
            .featured()
            .await?
            .iter()
            .map(|record| to_catalog_item(record).map_err(AppError::from))
            .collect()
    }
}

fn to_catalog_item(record: &CatalogRecord) -> Result<CatalogItem, DomainError> {
    serde_json::from_value(Value::Object(record.clone()))
        .map_err(|e| DomainError::Internal(format!("Malformed catalog record: {}", e)))
}
