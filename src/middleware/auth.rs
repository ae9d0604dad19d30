use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth;
use crate::error::ApiError;
use crate::AppState;

/// Authenticated caller context extracted from a verified token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user: String,
}

/// Bearer-token middleware: rejects with 401 unless the Authorization header
/// carries a token that verifies against the issuing secret.
pub async fn require_bearer(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers).map_err(ApiError::unauthorized)?;

    let claims = auth::verify(&token, &state.security.jwt_secret)
        .map_err(|e| ApiError::unauthorized(format!("Invalid bearer token: {}", e)))?;

    request.extensions_mut().insert(AuthUser { user: claims.user });
    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty bearer token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}
