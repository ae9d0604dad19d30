use axum::Extension;

use crate::middleware::AuthUser;

/// GET /hello - fixed greeting, reachable only with a valid bearer token
pub async fn greet(Extension(user): Extension<AuthUser>) -> &'static str {
    tracing::debug!("greeting {}", user.user);
    "Hello, World!"
}
