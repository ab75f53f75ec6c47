//! CORS middleware for the cors lesson

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::Config;
use crate::error::ConfigError;

/// Build the CORS layer from the configured origin list.
///
/// Methods and headers are mirrored from the request, which is how "any"
/// is expressed when credentials are allowed.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, ConfigError> {
    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            if origin == "*" {
                return Err(ConfigError::InvalidOrigin(origin.clone()));
            }
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(config.cors_allow_credentials))
}
