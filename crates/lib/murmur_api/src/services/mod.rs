//! Business logic services called by handlers.

pub mod chat;
