use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

#[cfg(test)]
mod testing;

use adapters::HttpTransport;
use application::ForwardingGateway;
use config::GatewayConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<ForwardingGateway>,
}

impl AppState {
    pub fn new(gateway: ForwardingGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}

/// Relay routes plus docs, CORS and request tracing
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(routes::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🎭 Avatar Relay initializing...");

    let config = GatewayConfig::from_lookup(|key| secrets.get(key)).map_err(anyhow::Error::new)?;
    tracing::info!("🔐 Avatar provider API key loaded");

    let transport = HttpTransport::new().map_err(anyhow::Error::new)?;
    let gateway = ForwardingGateway::new(Arc::new(transport), config);

    tracing::info!(
        "🔗 Upstreams: avatar={} (timeout {:?}), chat={} (timeout {:?})",
        gateway.config().avatar_base_url,
        gateway.config().avatar_timeout,
        gateway.config().chat_url,
        gateway.config().chat_timeout
    );
    tracing::info!("🩺 Diagnostics policy: {:?}", gateway.config().diagnostics);

    let router = build_router(AppState::new(gateway));

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Avatar Relay ready");

    Ok(router.into())
}
