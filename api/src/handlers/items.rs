//! Item handlers
//!
//! Query parameters with defaults, cookies, validated bodies and a body
//! that mixes an optional model with a plain value.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::PricedItem;
use crate::domain::entities::{Item, ItemListing};
use crate::error::AppError;
use crate::extract::{Cookies, ValidJson, ValidPath, ValidQuery};
use crate::AppState;

/// Query parameters for listing items
#[derive(Debug, Deserialize, Validate)]
pub struct ListItemsQuery {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

#[derive(Debug, Serialize)]
pub struct ItemListResponse {
    pub lists: Vec<ItemListing>,
    pub cookie_id: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ItemIdPath {
    /// The ID of the item to update
    #[validate(range(min = 0, max = 1000))]
    pub item_id: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateItemQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// Request body for updating an item
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateItemRequest {
    #[serde(default)]
    #[validate(nested)]
    pub item: Option<Item>,
    pub importance: i64,
}

#[derive(Debug, Serialize)]
pub struct UpdateItemResponse {
    pub item_id: i64,
    pub importance: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
}

/// GET /items/
///
/// A page of the item listing, plus the `ads_id` cookie if one was sent.
pub async fn list_items(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ListItemsQuery>,
    cookies: Cookies,
) -> Result<Json<ItemListResponse>, AppError> {
    let lists = state.item_service.list(query.skip, query.limit).await?;

    Ok(Json(ItemListResponse {
        lists,
        cookie_id: cookies.get("ads_id").map(str::to_string),
    }))
}

/// POST /items/
pub async fn create_item(
    State(state): State<AppState>,
    ValidJson(item): ValidJson<Item>,
) -> Result<Json<PricedItem>, AppError> {
    tracing::debug!(name = %item.name, price = item.price, "Creating item");
    Ok(Json(state.item_service.price(item)))
}

/// PUT /items/:item_id
pub async fn update_item(
    ValidPath(path): ValidPath<ItemIdPath>,
    ValidQuery(query): ValidQuery<UpdateItemQuery>,
    ValidJson(request): ValidJson<UpdateItemRequest>,
) -> Result<Json<UpdateItemResponse>, AppError> {
    tracing::debug!(item_id = path.item_id, "Updating item");

    Ok(Json(UpdateItemResponse {
        item_id: path.item_id,
        importance: request.importance,
        q: query.q.filter(|q| !q.is_empty()),
        item: request.item,
    }))
}
