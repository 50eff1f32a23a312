//! Hello world endpoint — liveness check.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::HelloWorldResponse;
use crate::services::chat;

/// `GET /api/hello` — reports the core version and how many sessions exist.
pub async fn hello_world(State(state): State<AppState>) -> Json<HelloWorldResponse> {
    Json(HelloWorldResponse {
        greeting: murmur_core::hello::hello_world(),
        session_count: chat::session_count(&state).await,
    })
}
