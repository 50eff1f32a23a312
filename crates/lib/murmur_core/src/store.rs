//! In-memory session store.
//!
//! Owns every session for the lifetime of the process. The store itself is
//! not synchronized; callers that share it across tasks wrap it in a lock.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::ChatError;
use crate::models::{Feedback, Message, NewSession, Session, SessionSummary};
use crate::title::derive_title;

/// Error message for lookups of unknown session ids.
pub const SESSION_NOT_FOUND: &str = "Session not found";

/// Error message for empty or missing user content.
pub const QUESTION_REQUIRED: &str = "Question is required";

/// Session records in insertion order, indexed by id.
#[derive(Debug)]
pub struct SessionStore {
    sessions: Vec<Session>,
    index: HashMap<String, usize>,
    next_id: u64,
}

impl SessionStore {
    /// Create an empty store. The first session gets id `session-1`.
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
            index: HashMap::new(),
            next_id: 1,
        }
    }

    /// Number of sessions held.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Create an empty session stamped with the current time.
    pub fn create(&mut self) -> NewSession {
        self.create_at(Utc::now())
    }

    /// Create an empty session with an explicit creation time.
    pub fn create_at(&mut self, created_at: DateTime<Utc>) -> NewSession {
        let id = format!("session-{}", self.next_id);
        self.next_id += 1;

        self.index.insert(id.clone(), self.sessions.len());
        self.sessions.push(Session::new(id.clone(), created_at));

        info!(session_id = %id, "created session");
        NewSession {
            session_id: id,
            timestamp: created_at,
        }
    }

    /// Look up a session by id.
    pub fn get(&self, id: &str) -> Result<&Session, ChatError> {
        self.index
            .get(id)
            .map(|&i| &self.sessions[i])
            .ok_or_else(|| ChatError::NotFound(SESSION_NOT_FOUND.into()))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Session, ChatError> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.sessions[i]),
            None => Err(ChatError::NotFound(SESSION_NOT_FOUND.into())),
        }
    }

    /// Summaries of all sessions, newest first.
    ///
    /// Sessions created at the same instant keep their insertion order.
    pub fn list(&self) -> Vec<SessionSummary> {
        let mut summaries: Vec<SessionSummary> =
            self.sessions.iter().map(Session::summary).collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        summaries
    }

    /// Append a user message.
    ///
    /// The first message of a session also replaces the default title with
    /// one derived from `content`. An unknown session is reported before
    /// empty content.
    pub fn append_user_message(&mut self, id: &str, content: &str) -> Result<Message, ChatError> {
        let session = self.get_mut(id)?;
        if content.is_empty() {
            return Err(ChatError::Validation(QUESTION_REQUIRED.into()));
        }

        if session.messages.is_empty() {
            session.title = derive_title(content);
            debug!(session_id = %id, title = %session.title, "titled session");
        }

        let message = Message::user(content, Utc::now());
        session.messages.push(message.clone());
        debug!(session_id = %id, count = session.messages.len(), "appended user message");
        Ok(message)
    }

    /// Append an assistant message with no feedback.
    pub fn append_assistant_message(
        &mut self,
        id: &str,
        content: &str,
    ) -> Result<Message, ChatError> {
        let session = self.get_mut(id)?;
        let message = Message::assistant(content, Utc::now());
        session.messages.push(message.clone());
        debug!(session_id = %id, count = session.messages.len(), "appended assistant message");
        Ok(message)
    }

    /// Set or clear the feedback on the assistant message at `index`.
    pub fn set_feedback(
        &mut self,
        id: &str,
        index: usize,
        feedback: Option<Feedback>,
    ) -> Result<Message, ChatError> {
        let session = self.get_mut(id)?;
        let message = session
            .messages
            .get_mut(index)
            .ok_or_else(|| ChatError::NotFound(format!("Message {index} not found")))?;

        match &mut *message {
            Message::Assistant { feedback: slot, .. } => *slot = feedback,
            Message::User { .. } => {
                return Err(ChatError::Validation(
                    "Feedback is only allowed on assistant messages".into(),
                ));
            }
        }

        debug!(session_id = %id, index, ?feedback, "updated feedback");
        Ok(message.clone())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
