//! HTTP handlers
//!
//! Axum request handlers for the lesson endpoints.

pub mod catalog;
pub mod files;
pub mod greetings;
pub mod items;
pub mod models;
pub mod offers;
pub mod users;

pub use catalog::{
    create_catalog_item, list_catalog_items, read_catalog_item, read_catalog_item_name,
    read_catalog_item_public,
};
pub use files::read_file;
pub use greetings::{auth_stub, health, hello, hello_world};
pub use items::{create_item, list_items, update_item};
pub use models::get_model;
pub use offers::create_offer;
pub use users::{create_user, read_user, read_user_item, read_user_me};
