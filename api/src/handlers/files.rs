//! File handlers
//!
//! A path parameter that swallows the rest of the path, slashes included.

use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::extract::ValidPath;

#[derive(Debug, Deserialize, Validate)]
pub struct FilePath {
    pub file_path: String,
}

#[derive(Debug, Serialize)]
pub struct FileResponse {
    pub file_path: String,
}

/// GET /files/*file_path
pub async fn read_file(ValidPath(path): ValidPath<FilePath>) -> Json<FileResponse> {
    Json(FileResponse {
        file_path: path.file_path,
    })
}
