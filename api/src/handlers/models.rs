//! Model handlers
//!
//! Path parameters restricted to a closed set of values.

use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ModelName;
use crate::extract::ValidPath;

#[derive(Debug, Deserialize, Validate)]
pub struct ModelPath {
    pub model_name: ModelName,
}

#[derive(Debug, Serialize)]
pub struct ModelResponse {
    pub model_name: ModelName,
    pub message: &'static str,
}

/// GET /models/:model_name
pub async fn get_model(ValidPath(path): ValidPath<ModelPath>) -> Json<ModelResponse> {
    tracing::debug!(model_name = %path.model_name, "Describing model");

    Json(ModelResponse {
        model_name: path.model_name,
        message: path.model_name.message(),
    })
}
