//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use axum_test::TestServer;
use serde_json::{json, Value};

use crate::adapters::InMemoryItemCatalog;
use crate::config::{Config, Lesson};
use crate::domain::entities::{Image, Item};
use crate::routes;
use crate::AppState;

/// Create a valid item with tax and one image
pub fn test_item() -> Item {
    Item {
        name: "Foo".to_string(),
        description: Some("A very nice Item".to_string()),
        price: 35.4,
        tax: Some(3.2),
        tags: vec!["rock".to_string(), "metal".to_string()],
        images: Some(vec![Image {
            url: "http://example.com/baz.jpg".to_string(),
            name: "The Foo live".to_string(),
        }]),
    }
}

/// The same item as a request body
pub fn test_item_json() -> Value {
    json!({
        "name": "Foo",
        "description": "A very nice Item",
        "price": 35.4,
        "tax": 3.2,
        "tags": ["rock", "metal"],
        "images": [{"url": "http://example.com/baz.jpg", "name": "The Foo live"}]
    })
}

/// Default config pointed at a lesson
pub fn test_config(lesson: Lesson) -> Config {
    Config {
        lesson,
        ..Config::default()
    }
}

/// State backed by the seeded catalog
pub fn test_state(config: Config) -> AppState {
    AppState::new(InMemoryItemCatalog::seeded(), config)
}

/// A test server hosting one lesson with default config
pub fn test_server(lesson: Lesson) -> TestServer {
    test_server_with(test_config(lesson))
}

/// A test server hosting the lesson named in `config`
pub fn test_server_with(config: Config) -> TestServer {
    let app = routes::router(test_state(config)).expect("router should build");
    TestServer::new(app).expect("test server should start")
}
