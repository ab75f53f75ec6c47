//! Routebook API Server
//!
//! A set of small HTTP applications, one per lesson, each showing a
//! request-parsing or response-shaping technique.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod extract;
mod handlers;
mod middleware;
mod routes;

#[cfg(test)]
mod test_utils;


use adapters::InMemoryItemCatalog;
use app::ItemService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub item_service: Arc<ItemService<InMemoryItemCatalog>>,
    pub config: Config,
}

impl AppState {
    pub fn new(catalog: InMemoryItemCatalog, config: Config) -> Self {
        Self {
            item_service: Arc::new(ItemService::new(Arc::new(catalog))),
            config,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,routebook_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Routebook API...");

    let config = Config::from_env().context("Failed to load configuration")?;
    let addr = config.addr();
    let lesson = config.lesson;

    let state = AppState::new(InMemoryItemCatalog::seeded(), config);
    let app = routes::router(state).context("Failed to build router")?;

    tracing::info!(%lesson, "Serving lesson");
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
