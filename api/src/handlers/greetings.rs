//! Greeting handlers
//!
//! The landing routes of each lesson, plus the health check.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub hello: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StubResponse {
    pub aa: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET / (params lesson)
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse { hello: "你好" })
}

/// GET / (cors lesson)
pub async fn hello_world() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "hello world",
    })
}

/// GET / (auth lesson)
///
/// Placeholder until token issuing exists.
pub async fn auth_stub() -> Json<StubResponse> {
    Json(StubResponse { aa: "bbbb" })
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
