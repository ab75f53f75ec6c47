//! Domain entities
//!
//! Plain data-transfer shapes. Each lives for a single request.

pub mod catalog_item;
pub mod item;
pub mod model_name;
pub mod user;

pub use catalog_item::{CatalogItem, ItemListing};
pub use item::{Image, Item, Offer};
pub use model_name::ModelName;
pub use user::{UserIn, UserOut};
