use axum::routing::{get, post};
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;

use config::SecurityConfig;
use database::repository::WordRepository;

/// Shared per-request context, constructed once in main and handed to the
/// router. No package-level handles; tests build their own.
#[derive(Clone)]
pub struct AppState {
    pub repo: WordRepository,
    pub security: SecurityConfig,
}

pub fn app(state: AppState) -> Router {
    // Unsupported verbs on /words fall through to axum's 405
    let words = post(handlers::words::create)
        .get(handlers::words::list)
        .delete(handlers::words::delete_all);

    let protected = Router::new()
        .route("/hello", get(handlers::hello::greet))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_bearer,
        ));

    Router::new()
        .route("/jwt", get(handlers::jwt::issue))
        .route("/words", words)
        .merge(protected)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
