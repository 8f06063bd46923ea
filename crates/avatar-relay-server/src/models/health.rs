//! Service descriptor returned by the health check

use serde::Serialize;
use utoipa::ToSchema;

pub const SERVICE_NAME: &str = "HeyGen LiveAvatar Streaming Backend";

/// Health check response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceDescriptor {
    pub status: String,
    pub service: String,
    pub version: String,
    pub endpoints: EndpointDirectory,
    pub limits: TierLimits,
}

/// Human-readable summary of the relayed routes
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EndpointDirectory {
    pub streaming_token: String,
    pub avatars: String,
    pub interactive_avatars: String,
    pub voices: String,
    pub chat: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TierLimits {
    pub free_tier: FreeTierLimits,
}

/// Documented limits of the provider's free tier (informational only)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FreeTierLimits {
    pub resolution: String,
    pub session_duration: String,
    pub credits_per_minute: String,
    pub monthly_credits: String,
}

impl ServiceDescriptor {
    pub fn current() -> Self {
        Self {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints: EndpointDirectory {
                streaming_token: "/streaming_token (POST)".to_string(),
                avatars: "/avatars (all avatars)".to_string(),
                interactive_avatars: "/interactive_avatars (streaming only)".to_string(),
                voices: "/voices".to_string(),
                chat: "/chat (POST)".to_string(),
            },
            limits: TierLimits {
                free_tier: FreeTierLimits {
                    resolution: "720p max".to_string(),
                    session_duration: "3 minutes max".to_string(),
                    credits_per_minute: "0.2 credits".to_string(),
                    monthly_credits: "10 credits".to_string(),
                },
            },
        }
    }
}
