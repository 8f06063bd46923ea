//! Upstream - External providers the relay forwards to

use std::time::Duration;

/// Third-party HTTP API behind the relay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upstream {
    /// Streaming-avatar provider (tokens, avatars, voices)
    Avatar,
    /// Retrieval-augmented chat provider
    Chat,
}

impl Upstream {
    /// Timeout applied when no override is configured
    pub fn default_timeout(&self) -> Duration {
        match self {
            Upstream::Avatar => Duration::from_secs(60),
            Upstream::Chat => Duration::from_secs(120),
        }
    }
}

impl std::fmt::Display for Upstream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Upstream::Avatar => write!(f, "avatar"),
            Upstream::Chat => write!(f, "chat"),
        }
    }
}
