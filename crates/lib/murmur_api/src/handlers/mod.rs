//! Request handlers.

pub mod chat;
pub mod hello;
pub mod sessions;
