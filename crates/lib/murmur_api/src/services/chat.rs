//! Chat service — coordinates the session store and the responder.

use tracing::{info, warn};

use murmur_core::ChatError;
use murmur_core::models::{Feedback, Message, NewSession, Session, SessionSummary};

use crate::AppState;
use crate::error::{AppError, AppResult};

// ---------------------------------------------------------------------------
// Error conversion
// ---------------------------------------------------------------------------

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::NotFound(msg) => AppError::NotFound(msg),
            ChatError::Validation(msg) => AppError::Validation(msg),
            other => AppError::Internal(other.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Start a new, empty session.
pub async fn new_session(state: &AppState) -> NewSession {
    state.store.write().await.create()
}

/// Record a question and a canned answer, returning the answer.
///
/// The store stays write-locked across both appends so the pair lands
/// together.
pub async fn ask(state: &AppState, session_id: &str, question: &str) -> AppResult<Message> {
    let mut store = state.store.write().await;

    if let Err(e) = store.append_user_message(session_id, question) {
        warn!(session_id, error = %e, "rejected question");
        return Err(e.into());
    }

    let reply = state.responder.lock().await.reply().to_string();
    let message = store.append_assistant_message(session_id, &reply)?;
    info!(session_id, "answered question");
    Ok(message)
}

/// Summaries of all sessions, newest first.
pub async fn list_sessions(state: &AppState) -> Vec<SessionSummary> {
    state.store.read().await.list()
}

/// Full record of one session.
pub async fn get_session(state: &AppState, session_id: &str) -> AppResult<Session> {
    let store = state.store.read().await;
    Ok(store.get(session_id)?.clone())
}

/// Set or clear feedback on an assistant message.
pub async fn set_feedback(
    state: &AppState,
    session_id: &str,
    index: usize,
    feedback: Option<Feedback>,
) -> AppResult<Message> {
    let message = state
        .store
        .write()
        .await
        .set_feedback(session_id, index, feedback)?;
    Ok(message)
}

/// Number of sessions currently held.
pub async fn session_count(state: &AppState) -> usize {
    state.store.read().await.len()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use murmur_core::models::Role;
    use murmur_core::replies::default_replies;
    use murmur_core::responder::Responder;
    use murmur_core::store::SessionStore;

    use super::*;
    use crate::config::ApiConfig;

    fn state() -> AppState {
        let responder = Responder::new(default_replies(), StdRng::seed_from_u64(11)).unwrap();
        AppState::new(ApiConfig::default(), SessionStore::new(), responder)
    }

    #[tokio::test]
    async fn ask_appends_question_and_answer() {
        let state = state();
        let id = new_session(&state).await.session_id;

        let reply = ask(&state, &id, "What is the weather today in Paris")
            .await
            .unwrap();
        assert_eq!(reply.role(), Role::Assistant);
        assert!(default_replies().contains(&reply.content().to_string()));

        let session = get_session(&state, &id).await.unwrap();
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[0].role(), Role::User);
        assert_eq!(session.messages[1], reply);
        assert_eq!(session.title, "What is the weather today");
    }

    #[tokio::test]
    async fn ask_on_unknown_session_is_not_found() {
        let state = state();
        for question in ["", "hello"] {
            let err = ask(&state, "session-404", question).await.unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)));
        }
    }

    #[tokio::test]
    async fn rejected_question_leaves_session_untouched() {
        let state = state();
        let id = new_session(&state).await.session_id;

        let err = ask(&state, &id, "").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(get_session(&state, &id).await.unwrap().messages.is_empty());
    }

    #[tokio::test]
    async fn whitespace_question_is_answered() {
        let state = state();
        let id = new_session(&state).await.session_id;

        let reply = ask(&state, &id, "   ").await.unwrap();
        assert_eq!(reply.role(), Role::Assistant);

        let session = get_session(&state, &id).await.unwrap();
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[0].content(), "   ");
    }

    #[tokio::test]
    async fn configuration_errors_map_to_internal() {
        assert!(matches!(
            AppError::from(ChatError::NoCandidates),
            AppError::Internal(_)
        ));
    }
}
