//! Canned reply candidates.

use std::path::Path;

use crate::ChatError;

/// Built-in single-sentence replies.
pub const DEFAULT_REPLIES: &[&str] = &[
    "Hello! How can I help you today?",
    "Hi there! I'm here to assist you. What would you like to know?",
    "That's an interesting question. Let me think about that.",
    "I understand what you're asking. Here's what I think.",
    "Thanks for your question. I'd be happy to help with that.",
    "That's a great question! Let me provide you with some information.",
    "I can help you with that. Here's what you need to know.",
    "Sure, I can assist you with that topic.",
    "That's something I can help you understand better.",
    "I appreciate your question. Here's my response.",
    "Let me help you with that information.",
    "I'd be glad to provide you with an answer.",
    "That's a good point. Here's what I think about it.",
    "I can provide some insights on that topic.",
    "Thanks for asking! Here's what I know about that.",
];

/// Owned copy of [`DEFAULT_REPLIES`].
pub fn default_replies() -> Vec<String> {
    DEFAULT_REPLIES.iter().map(|s| s.to_string()).collect()
}

/// Load replacement replies from a JSON file containing an array of strings.
///
/// An unreadable file, malformed JSON, or an empty array is an error.
pub fn load_replies(path: &Path) -> Result<Vec<String>, ChatError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ChatError::InvalidReplies(format!("{}: {e}", path.display())))?;
    let replies: Vec<String> = serde_json::from_str(&raw)
        .map_err(|e| ChatError::InvalidReplies(format!("{}: {e}", path.display())))?;

    if replies.is_empty() {
        return Err(ChatError::NoCandidates);
    }
    Ok(replies)
}
