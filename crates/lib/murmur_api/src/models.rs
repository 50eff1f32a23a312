//! Request and response bodies for the HTTP API.

use serde::{Deserialize, Serialize};

use murmur_core::models::{Feedback, Message, Session, SessionSummary};

/// Error body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of `POST /api/chat/{sessionId}/ask`.
///
/// `question` is optional here so its absence surfaces as a validation error
/// rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

/// Reply to an ask, or to a feedback update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub session_id: String,
    pub message: Message,
}

/// Body of `GET /api/sessions`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionListResponse {
    pub sessions: Vec<SessionSummary>,
}

/// Body of `GET /api/sessions/{sessionId}`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session: Session,
}

/// Body of `POST /api/sessions/{sessionId}/messages/{index}/feedback`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    pub feedback: Option<Feedback>,
}

/// Body of `GET /api/hello`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelloWorldResponse {
    pub greeting: String,
    pub session_count: usize,
}
