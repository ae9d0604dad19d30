use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::database::models::{NewWord, Word};
use crate::database::repository::DeleteScope;
use crate::error::ApiError;
use crate::AppState;

/// POST /words body. Fields default to empty when absent; the service does
/// not validate field contents.
#[derive(Debug, Deserialize)]
pub struct CreateWordRequest {
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<CreateWordRequest> for NewWord {
    fn from(req: CreateWordRequest) -> Self {
        NewWord {
            original: req.original,
            translation: req.translation,
            tags: req.tags,
        }
    }
}

/// Wire shape of a word: tags flattened to their names.
#[derive(Debug, Serialize)]
pub struct WordResponse {
    pub id: i64,
    pub original: String,
    pub translation: String,
    pub tags: Vec<String>,
}

impl From<Word> for WordResponse {
    fn from(word: Word) -> Self {
        WordResponse {
            id: word.id,
            tags: word.tag_names(),
            original: word.original,
            translation: word.translation,
        }
    }
}

/// POST /words - persist a word with its tags. 201 on success, empty body.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateWordRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(format!("Invalid request body: {}", e)))?;

    state.repo.create(request.into()).await?;
    Ok(StatusCode::CREATED)
}

/// GET /words - every word with its tags, insertion order.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<WordResponse>>, ApiError> {
    let words = state.repo.get_all().await?;
    Ok(Json(words.into_iter().map(WordResponse::from).collect()))
}

/// DELETE /words - remove all words. 204 on success, empty body.
pub async fn delete_all(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.repo.delete_all(DeleteScope::AllowUnscoped).await?;
    Ok(StatusCode::NO_CONTENT)
}
