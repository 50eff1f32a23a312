//! Session history request handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{FeedbackRequest, MessageResponse, SessionListResponse, SessionResponse};
use crate::services::chat;

/// `GET /api/sessions` — list sessions, newest first.
pub async fn list_sessions_handler(State(state): State<AppState>) -> Json<SessionListResponse> {
    Json(SessionListResponse {
        sessions: chat::list_sessions(&state).await,
    })
}

/// `GET /api/sessions/{sessionId}` — full history of one session.
pub async fn get_session_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> AppResult<Json<SessionResponse>> {
    let session = chat::get_session(&state, &session_id).await?;
    Ok(Json(SessionResponse { session }))
}

/// `POST /api/sessions/{sessionId}/messages/{index}/feedback` — like, dislike,
/// or clear feedback on an assistant message.
pub async fn feedback_handler(
    State(state): State<AppState>,
    path: Result<Path<(String, usize)>, PathRejection>,
    body: Result<Json<FeedbackRequest>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path((session_id, index)) = path.map_err(|e| AppError::Validation(e.body_text()))?;
    let Json(req) = body.map_err(|e| AppError::Validation(e.body_text()))?;

    let message = chat::set_feedback(&state, &session_id, index, req.feedback).await?;
    Ok(Json(MessageResponse {
        session_id,
        message,
    }))
}
