//! Avatar Routes - Avatar catalogs
//!
//! GET /avatars - All avatars (regular and interactive)
//! GET /interactive_avatars - Interactive avatars only (streaming capable)

use avatar_relay::Operation;
use axum::{extract::State, routing::get, Router};

use super::relayed::Relayed;
use crate::models::ErrorBody;
use crate::AppState;

/// List all avatars
#[utoipa::path(
    get,
    path = "/avatars",
    responses(
        (status = 200, description = "Upstream avatar list, verbatim"),
        (status = 504, description = "Upstream timed out", body = ErrorBody),
        (status = 500, description = "Transport failure", body = ErrorBody)
    ),
    tag = "Avatars"
)]
pub async fn list_avatars(State(state): State<AppState>) -> Relayed {
    state.gateway.list_all_avatars().await.into()
}

/// List interactive avatars
///
/// Served by the provider's dedicated streaming endpoint, which only returns
/// avatars that work with the streaming API.
#[utoipa::path(
    get,
    path = "/interactive_avatars",
    responses(
        (status = 200, description = "Upstream interactive avatar list, verbatim"),
        (status = 504, description = "Upstream timed out", body = ErrorBody),
        (status = 500, description = "Transport failure", body = ErrorBody)
    ),
    tag = "Avatars"
)]
pub async fn list_interactive_avatars(State(state): State<AppState>) -> Relayed {
    state.gateway.list_interactive_avatars().await.into()
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(Operation::ListAllAvatars.route(), get(list_avatars))
        .route(
            Operation::ListInteractiveAvatars.route(),
            get(list_interactive_avatars),
        )
}
