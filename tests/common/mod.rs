use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;

use wordstock::config::{DatabaseConfig, SecurityConfig, StorageBackend};
use wordstock::database::{self, repository::WordRepository};
use wordstock::AppState;

pub const TEST_SECRET: &str = "test-secret";

/// Build the router over a fresh in-memory database. Each test gets its own
/// state; nothing is shared between tests.
pub async fn test_app() -> Router {
    let db_config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        backend: StorageBackend::Sqlite,
        max_connections: 1,
    };
    let pool = database::connect(&db_config).await.expect("open test pool");
    database::migrate(&pool, db_config.backend).await.expect("migrate test schema");

    let state = AppState {
        repo: WordRepository::new(pool),
        security: SecurityConfig {
            jwt_secret: TEST_SECRET.to_string(),
            jwt_expiry_minutes: 100,
        },
    };
    wordstock::app(state)
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body is valid JSON")
}
