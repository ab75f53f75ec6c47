//! User handlers
//!
//! Path parameters, typed path parameters with bounds, optional and
//! aliased query parameters, and the password-dropping user model.

use axum::Json;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::entities::{UserIn, UserOut};
use crate::error::AppError;
use crate::extract::{lenient_bool, ValidJson, ValidPath, ValidQuery};

const LONG_DESCRIPTION: &str = "This is an amazing item that has a long description";

#[derive(Debug, Deserialize, Validate)]
pub struct UserPath {
    pub user_id: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UserItemPath {
    pub user_id: i64,
    /// The ID of the item to get
    #[validate(range(min = 1, max = 1000))]
    pub item_id: i64,
}

const ITEM_QUERY: &str = "item-query";
const ITEM_QUERY_MIN: u64 = 3;
const ITEM_QUERY_MAX: u64 = 50;

#[derive(Debug, Deserialize)]
pub struct UserItemQuery {
    #[serde(default, rename = "item-query")]
    pub q: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub short: bool,
}

/// Checked by hand so failures carry the wire name `item-query`
impl Validate for UserItemQuery {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(q) = &self.q {
            let len = q.chars().count() as u64;
            if !(ITEM_QUERY_MIN..=ITEM_QUERY_MAX).contains(&len) {
                let mut error = ValidationError::new("length");
                error.add_param("min".into(), &ITEM_QUERY_MIN);
                error.add_param("max".into(), &ITEM_QUERY_MAX);
                error.add_param("value".into(), q);
                errors.add(ITEM_QUERY, error);
            }
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserIdResponse {
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct UserItemResponse {
    pub item_id: i64,
    pub owner_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

/// GET /users/me
pub async fn read_user_me() -> Json<UserIdResponse> {
    Json(UserIdResponse {
        user_id: "the current user".to_string(),
    })
}

/// GET /users/:user_id
pub async fn read_user(ValidPath(path): ValidPath<UserPath>) -> Json<UserIdResponse> {
    Json(UserIdResponse {
        user_id: path.user_id,
    })
}

/// GET /users/:user_id/items/:item_id
pub async fn read_user_item(
    ValidPath(path): ValidPath<UserItemPath>,
    ValidQuery(query): ValidQuery<UserItemQuery>,
) -> Json<UserItemResponse> {
    tracing::debug!(user_id = path.user_id, item_id = path.item_id, "Reading user item");

    Json(UserItemResponse {
        item_id: path.item_id,
        owner_id: path.user_id,
        q: query.q.filter(|q| !q.is_empty()),
        description: (!query.short).then_some(LONG_DESCRIPTION),
    })
}

/// POST /users/
///
/// Echo the new user back without its password.
pub async fn create_user(ValidJson(user): ValidJson<UserIn>) -> Result<Json<UserOut>, AppError> {
    tracing::debug!(username = %user.username, "Creating user");
    Ok(Json(UserOut::from(user)))
}
