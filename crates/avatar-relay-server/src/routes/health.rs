//! Health Route - Service descriptor
//!
//! GET / - Service name, relayed routes and documented tier limits

use avatar_relay::Operation;
use axum::{routing::get, Json, Router};

use crate::models::ServiceDescriptor;
use crate::AppState;

/// Health check
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = ServiceDescriptor)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor::current())
}

pub fn router() -> Router<AppState> {
    Router::new().route(Operation::HealthCheck.route(), get(health_check))
}
