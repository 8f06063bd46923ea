//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use avatar_relay::ChatRequest;

use crate::models::{EndpointDirectory, ErrorBody, FreeTierLimits, ServiceDescriptor, TierLimits};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::health_check,
        super::streaming::issue_streaming_token,
        super::avatars::list_avatars,
        super::avatars::list_interactive_avatars,
        super::voices::list_voices,
        super::chat::chat,
    ),
    info(
        title = "Avatar Relay API",
        description = "Proxy for the LiveAvatar streaming provider and the RAG chat agent.\n\nUpstream bodies are returned verbatim; failures share one `{\"error\": ...}` shape.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Service descriptor"),
        (name = "Streaming", description = "Streaming session tokens"),
        (name = "Avatars", description = "Avatar catalogs"),
        (name = "Voices", description = "Voice catalog"),
        (name = "Chat", description = "RAG chat passthrough"),
    ),
    components(
        schemas(
            // Health
            ServiceDescriptor,
            EndpointDirectory,
            TierLimits,
            FreeTierLimits,
            // Chat
            ChatRequest,
            // Errors
            ErrorBody,
        )
    ),
)]
pub struct ApiDoc;
