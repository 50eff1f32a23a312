//! # murmur_api
//!
//! HTTP API library for Murmur.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::sync::{Mutex, RwLock};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use murmur_core::ChatError;
use murmur_core::replies::{default_replies, load_replies};
use murmur_core::responder::Responder;
use murmur_core::store::SessionStore;

use crate::config::ApiConfig;
use crate::handlers::{chat, hello, sessions};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// All chat sessions for the lifetime of the process.
    pub store: Arc<RwLock<SessionStore>>,
    /// Canned reply source.
    pub responder: Arc<Mutex<Responder>>,
    /// API configuration.
    pub config: ApiConfig,
}

impl AppState {
    /// Build state around an existing store and responder.
    pub fn new(config: ApiConfig, store: SessionStore, responder: Responder) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            responder: Arc::new(Mutex::new(responder)),
            config,
        }
    }

    /// Build fresh state from configuration.
    ///
    /// Loads reply candidates from `config.replies_path` when set, otherwise
    /// uses the built-in list.
    pub fn from_config(config: ApiConfig) -> Result<Self, ChatError> {
        let candidates = match &config.replies_path {
            Some(path) => load_replies(path)?,
            None => default_replies(),
        };
        let responder = Responder::from_os_rng(candidates)?;
        Ok(Self::new(config, SessionStore::new(), responder))
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::GET_API_HELLO, get(hello::hello_world))
        .route(routes::POST_API_CHAT_NEW, post(chat::new_chat_handler))
        .route(routes::POST_API_CHAT_ID_ASK, post(chat::ask_handler))
        .route(routes::GET_API_SESSIONS, get(sessions::list_sessions_handler))
        .route(routes::GET_API_SESSIONS_ID, get(sessions::get_session_handler))
        .route(
            routes::POST_API_SESSIONS_ID_MESSAGES_INDEX_FEEDBACK,
            post(sessions::feedback_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
