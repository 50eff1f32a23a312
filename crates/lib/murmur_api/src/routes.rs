//! Route path constants.

pub const GET_API_HELLO: &str = "/api/hello";
pub const POST_API_CHAT_NEW: &str = "/api/chat/new";
pub const POST_API_CHAT_ID_ASK: &str = "/api/chat/{sessionId}/ask";
pub const GET_API_SESSIONS: &str = "/api/sessions";
pub const GET_API_SESSIONS_ID: &str = "/api/sessions/{sessionId}";
pub const POST_API_SESSIONS_ID_MESSAGES_INDEX_FEEDBACK: &str =
    "/api/sessions/{sessionId}/messages/{index}/feedback";
