//! # murmur_core
//!
//! Core domain logic for Murmur: the in-memory session store, session
//! titles, and canned replies.

pub mod hello;
pub mod models;
pub mod replies;
pub mod responder;
pub mod store;
pub mod title;

use thiserror::Error;

/// Domain errors raised by the session store and responder.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Reply candidate list is empty")]
    NoCandidates,

    #[error("Invalid reply candidates: {0}")]
    InvalidReplies(String),
}

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
