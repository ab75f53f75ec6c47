//! Unified error types for the routebook API
//!
//! This module defines error types for each layer:
//! - `DomainError`: errors raised by the catalog and domain models
//! - `ConfigError`: startup configuration errors
//! - `AppError`: application layer errors (wraps domain errors for HTTP responses)

use std::borrow::Cow;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Unknown lesson: {0}")]
    UnknownLesson(String),

    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

/// Where a rejected value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Body,
    Query,
    Path,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Body => "body",
            Location::Query => "query",
            Location::Path => "path",
        }
    }
}

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Path to the offending value, starting with its location
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: Vec<String>, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    /// Flatten `validator` errors into one entry per failing constraint
    pub fn from_validation(location: Location, errors: &ValidationErrors) -> Vec<FieldError> {
        let mut out = Vec::new();
        collect(&mut out, vec![location.as_str().to_string()], errors);
        out.sort_by(|a, b| a.loc.cmp(&b.loc));
        out
    }
}

fn collect(out: &mut Vec<FieldError>, prefix: Vec<String>, errors: &ValidationErrors) {
    for (field, kind) in errors.errors() {
        let mut loc = prefix.clone();
        loc.push(field.to_string());

        match kind {
            ValidationErrorsKind::Field(failures) => {
                for failure in failures {
                    let msg = failure
                        .message
                        .clone()
                        .unwrap_or_else(|| Cow::Owned(default_message(&failure.code)));
                    out.push(FieldError::new(
                        loc.clone(),
                        msg.into_owned(),
                        format!("value_error.{}", failure.code),
                    ));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(out, loc, nested),
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    let mut indexed = loc.clone();
                    indexed.push(index.to_string());
                    collect(out, indexed, nested);
                }
            }
        }
    }
}

fn default_message(code: &str) -> String {
    match code {
        "range" => "value is out of range".to_string(),
        "length" => "length is out of bounds".to_string(),
        "email" => "value is not a valid email address".to_string(),
        "url" => "invalid or missing URL scheme".to_string(),
        other => format!("failed {} check", other),
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unprocessable request")]
    Validation(Vec<FieldError>),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// A single-entry validation failure
    pub fn invalid(location: Location, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        AppError::Validation(vec![FieldError::new(
            vec![location.as_str().to_string()],
            msg,
            kind,
        )])
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details, errors) = match self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg), Vec::new())
            }
            AppError::Domain(DomainError::Internal(msg)) | AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                    Vec::new(),
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg), Vec::new())
            }
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation error",
                None,
                errors,
            ),
            AppError::UnsupportedMediaType(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Unsupported media type",
                Some(msg),
                Vec::new(),
            ),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
            errors,
        });

        (status, body).into_response()
    }
}
