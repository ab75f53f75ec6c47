//! Item domain entities
//!
//! The validated item shapes accepted by the params lesson: items,
//! their images, and offers bundling several items.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// An image attached to an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Image {
    /// Absolute http(s) URL
    #[validate(url, custom(function = "validate_http_scheme"))]
    pub url: String,
    pub name: String,
}

/// An item submitted by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Item {
    pub name: String,
    /// The description of the item
    #[serde(default)]
    #[validate(length(max = 300))]
    pub description: Option<String>,
    /// The price must be greater than zero
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub tax: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    #[validate(nested)]
    pub images: Option<Vec<Image>>,
}

impl Item {
    /// Price including tax, when a non-zero tax is set
    pub fn price_with_tax(&self) -> Option<f64> {
        self.tax.filter(|tax| *tax != 0.0).map(|tax| self.price + tax)
    }
}

/// A bundle of items sold together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Offer {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[validate(nested)]
    pub items: Vec<Item>,
}

fn validate_http_scheme(url: &str) -> Result<(), validator::ValidationError> {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Ok(())
    } else {
        Err(validator::ValidationError::new("url_scheme"))
    }
}
