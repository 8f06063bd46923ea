//! Avatar Relay Routes
//!
//! - / - Health check (service descriptor)
//! - /streaming_token - Streaming session token
//! - /avatars, /interactive_avatars - Avatar catalogs
//! - /voices - Voice catalog
//! - /chat - RAG chat passthrough

pub mod avatars;
pub mod chat;
pub mod health;
pub mod relayed;
pub mod streaming;
pub mod swagger;
pub mod voices;

use axum::Router;

use crate::AppState;

/// All relay routes, without state or middleware
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(streaming::router())
        .merge(avatars::router())
        .merge(voices::router())
        .merge(chat::router())
}
