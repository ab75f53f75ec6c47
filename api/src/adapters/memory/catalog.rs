//! In-memory adapter for ItemCatalog

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::domain::entities::ItemListing;
use crate::domain::ports::{CatalogRecord, ItemCatalog};
use crate::error::DomainError;

/// Fixed literal catalog
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemCatalog {
    listings: Vec<ItemListing>,
    records: BTreeMap<String, CatalogRecord>,
    featured: Vec<CatalogRecord>,
}

impl InMemoryItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog the lessons ship with
    pub fn seeded() -> Self {
        Self::new()
            .with_listing("Foo")
            .with_listing("Bar")
            .with_listing("Baz")
            .with_record("foo", json!({"name": "Foo", "price": 50.2}))
            .with_record(
                "bar",
                json!({"name": "Bar", "description": "The bartenders", "price": 62, "tax": 20.2}),
            )
            .with_record(
                "baz",
                json!({"name": "Baz", "description": null, "price": 50.2, "tax": 10.5, "tags": []}),
            )
            .with_featured(json!({"name": "Portal Gun", "price": 42.0}))
            .with_featured(json!({"name": "Jessey", "price": 62.0}))
    }

    pub fn with_listing(mut self, item_name: &str) -> Self {
        self.listings.push(ItemListing::new(item_name));
        self
    }

    /// Non-object values are ignored
    pub fn with_record(mut self, key: &str, record: Value) -> Self {
        if let Value::Object(fields) = record {
            self.records.insert(key.to_string(), fields);
        }
        self
    }

    pub fn with_featured(mut self, record: Value) -> Self {
        if let Value::Object(fields) = record {
            self.featured.push(fields);
        }
        self
    }
}

#[async_trait]
impl ItemCatalog for InMemoryItemCatalog {
    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<ItemListing>, DomainError> {
        Ok(self
            .listings
            .iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find(&self, key: &str) -> Result<Option<CatalogRecord>, DomainError> {
        Ok(self.records.get(key).cloned())
    }

    async fn featured(&self) -> Result<Vec<CatalogRecord>, DomainError> {
        Ok(self.featured.clone())
    }
}
