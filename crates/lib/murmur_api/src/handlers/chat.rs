//! Chat request handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use murmur_core::models::NewSession;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{AskRequest, MessageResponse};
use crate::services::chat;

/// `POST /api/chat/new` — start an empty session.
pub async fn new_chat_handler(State(state): State<AppState>) -> Json<NewSession> {
    Json(chat::new_session(&state).await)
}

/// `POST /api/chat/{sessionId}/ask` — ask a question and get a canned answer.
///
/// A body that is missing or not JSON is treated as a missing question.
pub async fn ask_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let question = body
        .ok()
        .and_then(|Json(req)| req.question)
        .unwrap_or_default();

    let message = chat::ask(&state, &session_id, &question).await?;
    Ok(Json(MessageResponse {
        session_id,
        message,
    }))
}
