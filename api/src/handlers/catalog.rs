//! Catalog handlers
//!
//! Routes that render their result through the `CatalogItem` response
//! model, each trimming it a different way.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::app::ResponseShape;
use crate::domain::entities::CatalogItem;
use crate::error::AppError;
use crate::extract::{ValidJson, ValidPath};
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CatalogKeyPath {
    pub item_id: String,
}

/// POST /items/
pub async fn create_catalog_item(
    ValidJson(item): ValidJson<CatalogItem>,
) -> Result<Json<CatalogItem>, AppError> {
    Ok(Json(item))
}

/// GET /items/
pub async fn list_catalog_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<CatalogItem>>, AppError> {
    Ok(Json(state.item_service.featured().await?))
}

/// GET /items/:item_id
///
/// Only the fields stored for the item, defaults left out.
pub async fn read_catalog_item(
    State(state): State<AppState>,
    ValidPath(path): ValidPath<CatalogKeyPath>,
) -> Result<Json<Value>, AppError> {
    read_shaped(&state, &path.item_id, ResponseShape::full().exclude_unset()).await
}

/// GET /items/:item_id/name
pub async fn read_catalog_item_name(
    State(state): State<AppState>,
    ValidPath(path): ValidPath<CatalogKeyPath>,
) -> Result<Json<Value>, AppError> {
    let shape = ResponseShape::full().include(&["name", "description", "price"]);
    read_shaped(&state, &path.item_id, shape).await
}

/// GET /items/:item_id/public
pub async fn read_catalog_item_public(
    State(state): State<AppState>,
    ValidPath(path): ValidPath<CatalogKeyPath>,
) -> Result<Json<Value>, AppError> {
    read_shaped(&state, &path.item_id, ResponseShape::full().exclude(&["tax"])).await
}

async fn read_shaped(
    state: &AppState,
    key: &str,
    shape: ResponseShape,
) -> Result<Json<Value>, AppError> {
    tracing::debug!(item_id = %key, "Reading catalog item");
    Ok(Json(state.item_service.find_shaped(key, &shape).await?))
}
