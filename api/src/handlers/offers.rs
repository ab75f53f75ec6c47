//! Offer handlers

use axum::Json;

use crate::domain::entities::Offer;
use crate::error::AppError;
use crate::extract::ValidJson;

/// POST /offers/
///
/// Echo a validated offer, nested items and images included.
pub async fn create_offer(ValidJson(offer): ValidJson<Offer>) -> Result<Json<Offer>, AppError> {
    tracing::debug!(name = %offer.name, items = offer.items.len(), "Creating offer");
    Ok(Json(offer))
}
