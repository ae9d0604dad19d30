use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::auth::{self, Claims};
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// GET /jwt - issue a signed token with the fixed claim set
pub async fn issue(State(state): State<AppState>) -> Result<Json<TokenResponse>, ApiError> {
    let claims = Claims::new(&state.security);
    let token = auth::sign(&claims, &state.security.jwt_secret)?;
    Ok(Json(TokenResponse { token }))
}
