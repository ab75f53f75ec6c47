//! User entities
//!
//! `UserIn` carries the password on the way in; `UserOut` is what the
//! API hands back.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserIn {
    pub username: String,
    /// Accepted on input only, never echoed back
    #[allow(dead_code)]
    pub password: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Public view of a user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserOut {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
}

impl From<UserIn> for UserOut {
    fn from(user: UserIn) -> Self {
        Self {
            username: user.username,
            email: user.email,
            full_name: user.full_name,
        }
    }
}
