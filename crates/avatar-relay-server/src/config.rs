//! Relay configuration loaded from the hosting runtime's secrets.
//!
//! # Keys
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `HEYGEN_API_KEY` | required | Avatar provider API key |
//! | `HEYGEN_BASE_URL` | `https://api.heygen.com` | Avatar provider base URL |
//! | `RAG_API_URL` | `https://rag-super-agent.onrender.com/chat/` | Chat provider URL |
//! | `AVATAR_TIMEOUT_SECS` | `60` | Avatar provider call timeout, must be positive |
//! | `CHAT_TIMEOUT_SECS` | `120` | Chat provider call timeout, must be positive |
//! | `EXPOSE_DIAGNOSTICS` | `false` | Echo failure diagnostics to callers (legacy shape); `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`, any case |

use std::time::Duration;

use avatar_relay::{DiagnosticPolicy, Upstream};
use thiserror::Error;

pub const DEFAULT_AVATAR_BASE_URL: &str = "https://api.heygen.com";
pub const DEFAULT_CHAT_URL: &str = "https://rag-super-agent.onrender.com/chat/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} is not a valid number of seconds: {value}")]
    InvalidTimeout { key: &'static str, value: String },

    #[error("{key} must be true or false, got: {value}")]
    InvalidFlag { key: &'static str, value: String },
}

/// Immutable relay configuration, loaded once at startup
#[derive(Clone)]
pub struct GatewayConfig {
    /// Sent as `X-Api-Key` on every avatar provider call
    pub api_key: String,
    /// Avatar provider base URL, without trailing slash
    pub avatar_base_url: String,
    pub chat_url: String,
    pub avatar_timeout: Duration,
    pub chat_timeout: Duration,
    pub diagnostics: DiagnosticPolicy,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"<redacted>")
            .field("avatar_base_url", &self.avatar_base_url)
            .field("chat_url", &self.chat_url)
            .field("avatar_timeout", &self.avatar_timeout)
            .field("chat_timeout", &self.chat_timeout)
            .field("diagnostics", &self.diagnostics)
            .finish()
    }
}

impl GatewayConfig {
    /// Configuration with default endpoints and timeouts
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_string(),
            chat_url: DEFAULT_CHAT_URL.to_string(),
            avatar_timeout: Upstream::Avatar.default_timeout(),
            chat_timeout: Upstream::Chat.default_timeout(),
            diagnostics: DiagnosticPolicy::default(),
        }
    }

    /// Build from any key lookup (shuttle `SecretStore`, env, test map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("HEYGEN_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("HEYGEN_API_KEY"))?;

        let mut config = Self::new(api_key);

        if let Some(url) = lookup("HEYGEN_BASE_URL").filter(|v| !v.is_empty()) {
            config = config.with_avatar_base_url(url);
        }
        if let Some(url) = lookup("RAG_API_URL").filter(|v| !v.is_empty()) {
            config = config.with_chat_url(url);
        }
        if let Some(timeout) = parse_secs(&lookup, "AVATAR_TIMEOUT_SECS")? {
            config.avatar_timeout = timeout;
        }
        if let Some(timeout) = parse_secs(&lookup, "CHAT_TIMEOUT_SECS")? {
            config.chat_timeout = timeout;
        }

        let diagnostics = if parse_flag(&lookup, "EXPOSE_DIAGNOSTICS")? {
            DiagnosticPolicy::Legacy
        } else {
            DiagnosticPolicy::ServerOnly
        };

        Ok(config.with_diagnostics(diagnostics))
    }

    pub fn with_avatar_base_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_chat_url(mut self, url: impl Into<String>) -> Self {
        self.chat_url = url.into();
        self
    }

    pub fn with_diagnostics(mut self, policy: DiagnosticPolicy) -> Self {
        self.diagnostics = policy;
        self
    }

    pub fn avatar_url(&self, path: &str) -> String {
        format!("{}/{}", self.avatar_base_url, path)
    }

    pub fn timeout_for(&self, upstream: Upstream) -> Duration {
        match upstream {
            Upstream::Avatar => self.avatar_timeout,
            Upstream::Chat => self.chat_timeout,
        }
    }
}

fn parse_secs<F>(lookup: &F, key: &'static str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => match value.trim().parse::<u64>() {
            // A zero timeout would fail every call
            Ok(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs))),
            _ => Err(ConfigError::InvalidTimeout { key, value }),
        },
    }
}

fn parse_flag<F>(lookup: &F, key: &'static str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(false);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { key, value }),
    }
}
