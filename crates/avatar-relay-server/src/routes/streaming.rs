//! Streaming Routes - Session tokens for the avatar SDK
//!
//! POST /streaming_token - Issue a streaming token

use avatar_relay::Operation;
use axum::{extract::State, routing::post, Router};

use super::relayed::Relayed;
use crate::models::ErrorBody;
use crate::AppState;

/// Issue a streaming token
#[utoipa::path(
    post,
    path = "/streaming_token",
    responses(
        (status = 200, description = "Upstream token response, verbatim"),
        (status = 504, description = "Upstream timed out", body = ErrorBody),
        (status = 500, description = "Transport failure", body = ErrorBody)
    ),
    tag = "Streaming"
)]
pub async fn issue_streaming_token(State(state): State<AppState>) -> Relayed {
    state.gateway.issue_streaming_token().await.into()
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        Operation::IssueStreamingToken.route(),
        post(issue_streaming_token),
    )
}
