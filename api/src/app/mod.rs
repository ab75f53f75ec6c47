//! Application layer
//!
//! Services coordinate between domain entities and ports.

pub mod item_service;
pub mod response_model;

pub use item_service::{ItemService, PricedItem};
pub use response_model::ResponseShape;
