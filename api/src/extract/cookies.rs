//! Cookie extractor

use std::collections::HashMap;
use std::convert::Infallible;

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts, HeaderMap},
};

/// Cookies sent with the request, by name.
///
/// When a name repeats, the last value wins.
#[derive(Debug, Clone, Default)]
pub struct Cookies(HashMap<String, String>);

impl Cookies {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut cookies = HashMap::new();

        for header in headers.get_all(COOKIE) {
            let Ok(header) = header.to_str() else {
                continue;
            };
            for pair in header.split(';') {
                if let Some((name, value)) = pair.split_once('=') {
                    let name = name.trim();
                    if name.is_empty() {
                        continue;
                    }
                    let value = value.trim().trim_matches('"');
                    cookies.insert(name.to_string(), value.to_string());
                }
            }
        }

        Self(cookies)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Cookies
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
