//! Lesson routers
//!
//! Each lesson is a self-contained application. They share the health
//! check and request tracing but nothing else.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::{Config, Lesson};
use crate::error::ConfigError;
use crate::handlers;
use crate::middleware::cors_layer;
use crate::AppState;

/// Build the router for the lesson named in the state's config
pub fn router(state: AppState) -> Result<Router, ConfigError> {
    let lesson = match state.config.lesson {
        Lesson::Params => params_router(),
        Lesson::Response => response_router(),
        Lesson::Cors => cors_router(&state.config)?,
        Lesson::Auth => auth_router(),
    };

    Ok(lesson.with_state(state))
}

/// Paths, queries, cookies and bodies
pub fn params_router() -> Router<AppState> {
    let router = Router::new()
        .route("/", get(handlers::hello))
        // Static segment takes priority over the parameter below
        .route("/users/me", get(handlers::read_user_me))
        .route("/users/:user_id", get(handlers::read_user))
        .route("/users/:user_id/items/:item_id", get(handlers::read_user_item))
        .route("/models/:model_name", get(handlers::get_model))
        .route("/files/*file_path", get(handlers::read_file))
        .route(
            "/items/",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route("/items/:item_id", put(handlers::update_item))
        .route("/offers/", post(handlers::create_offer));

    finish(router)
}

/// Response models
pub fn response_router() -> Router<AppState> {
    let router = Router::new()
        .route(
            "/items/",
            get(handlers::list_catalog_items).post(handlers::create_catalog_item),
        )
        .route("/items/:item_id", get(handlers::read_catalog_item))
        .route("/items/:item_id/name", get(handlers::read_catalog_item_name))
        .route(
            "/items/:item_id/public",
            get(handlers::read_catalog_item_public),
        )
        .route("/users/", post(handlers::create_user));

    finish(router)
}

/// CORS middleware
pub fn cors_router(config: &Config) -> Result<Router<AppState>, ConfigError> {
    let cors = cors_layer(config)?;

    Ok(Router::new()
        .route("/", get(handlers::hello_world))
        .route("/health", get(handlers::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        ))
}

/// Authentication stub
pub fn auth_router() -> Router<AppState> {
    finish(Router::new().route("/", get(handlers::auth_stub)))
}

fn finish(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
}
