//! Validated extractors
//!
//! Each extractor deserializes with the matching axum extractor, then runs
//! `validator::Validate`. Both kinds of failure become `AppError`s tagged
//! with where the value came from.

use async_trait::async_trait;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    Json,
};
use serde::{de, de::DeserializeOwned, Deserialize, Deserializer};
use validator::Validate;

use crate::config::parse_flag;
use crate::error::{AppError, FieldError, Location};

/// JSON request body, validated
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

/// Query string, validated
#[derive(Debug, Clone)]
pub struct ValidQuery<T>(pub T);

/// Path parameters, validated
#[derive(Debug, Clone)]
pub struct ValidPath<T>(pub T);

fn check<T: Validate>(value: T, location: Location) -> Result<T, AppError> {
    value
        .validate()
        .map_err(|e| AppError::Validation(FieldError::from_validation(location, &e)))?;
    Ok(value)
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(e) => {
            AppError::invalid(Location::Body, e.body_text(), "value_error.json")
        }
        JsonRejection::JsonSyntaxError(e) => AppError::BadRequest(e.body_text()),
        JsonRejection::MissingJsonContentType(e) => AppError::UnsupportedMediaType(e.body_text()),
        other => AppError::BadRequest(other.body_text()),
    }
}

fn path_rejection(rejection: PathRejection) -> AppError {
    match rejection {
        PathRejection::FailedToDeserializePathParams(e) => {
            AppError::invalid(Location::Path, e.body_text(), "value_error.path")
        }
        other => AppError::Internal(other.body_text()),
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        Ok(Self(check(value, Location::Body)?))
    }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::invalid(Location::Query, e.body_text(), "value_error.query"))?;
        Ok(Self(check(value, Location::Query)?))
    }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(path_rejection)?;
        Ok(Self(check(value, Location::Path)?))
    }
}

/// Deserialize a boolean query value spelled `true/false`, `1/0`, `yes/no` or `on/off`
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw)
        .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(&raw), &"a boolean"))
}
