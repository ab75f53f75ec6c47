//! Catalog item entity
//!
//! The unconstrained item model used by the response lesson. Missing
//! fields fall back to their defaults, so shaping can tell apart values
//! the client set from values it left alone.

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PRICE: f64 = 10.5;

fn default_price() -> f64 {
    DEFAULT_PRICE
}

/// An item as published by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CatalogItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_price")]
    pub price: f64,
    #[serde(default)]
    pub tax: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            tax: None,
            tags: Vec::new(),
        }
    }
}

/// An entry in the paginated listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemListing {
    pub item_name: String,
}

impl ItemListing {
    pub fn new(item_name: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_price_defaults() {
        let item: CatalogItem = serde_json::from_str(r#"{"name": "Foo"}"#).unwrap();
        assert_eq!(item.price, DEFAULT_PRICE);
        assert!(item.tags.is_empty());
    }

    #[test]
    fn integer_price_is_accepted() {
        let item: CatalogItem = serde_json::from_str(r#"{"name": "Bar", "price": 62}"#).unwrap();
        assert_eq!(item.price, 62.0);
    }

    #[test]
    fn serialize_keeps_null_fields() {
        let json = serde_json::to_value(CatalogItem::new("Portal Gun", 42.0)).unwrap();
        assert!(json["description"].is_null());
        assert!(json["tax"].is_null());
        assert_eq!(json["tags"], serde_json::json!([]));
    }
}
