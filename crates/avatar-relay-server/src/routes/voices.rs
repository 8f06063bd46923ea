//! Voice Routes
//!
//! GET /voices - Voices available for streaming

use avatar_relay::Operation;
use axum::{extract::State, routing::get, Router};

use super::relayed::Relayed;
use crate::models::ErrorBody;
use crate::AppState;

/// List voices
#[utoipa::path(
    get,
    path = "/voices",
    responses(
        (status = 200, description = "Upstream voice list, verbatim"),
        (status = 504, description = "Upstream timed out", body = ErrorBody),
        (status = 500, description = "Transport failure", body = ErrorBody)
    ),
    tag = "Voices"
)]
pub async fn list_voices(State(state): State<AppState>) -> Relayed {
    state.gateway.list_voices().await.into()
}

pub fn router() -> Router<AppState> {
    Router::new().route(Operation::ListVoices.route(), get(list_voices))
}
