//! Upstream Transport Port
//!
//! Abstract interface for performing outbound HTTP calls.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{OutboundCall, UpstreamResponse};

/// Why an outbound call produced no upstream response
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("timed out: {0}")]
    Timeout(String),

    /// Connect, send or read failure. `chain` holds the error and its sources,
    /// outermost first.
    #[error("{message}")]
    Failure { message: String, chain: Vec<String> },
}

impl TransportError {
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Failure {
            chain: vec![message.clone()],
            message,
        }
    }

    /// Full diagnostic description, one cause per line
    pub fn diagnostic(&self) -> String {
        match self {
            TransportError::Timeout(detail) => detail.clone(),
            TransportError::Failure { chain, .. } => chain.join("\ncaused by: "),
        }
    }
}

/// Outbound HTTP interface
///
/// Implementations send exactly one request per call, apply
/// `call.timeout` to the whole exchange and never retry. Non-2xx statuses
/// are returned as `Ok`; only a missing response is an `Err`.
///
/// # Example
///
/// ```rust,ignore
/// use avatar_relay::ports::UpstreamTransport;
///
/// struct HttpTransport { /* reqwest client */ }
///
/// #[async_trait]
/// impl UpstreamTransport for HttpTransport {
///     async fn execute(&self, call: &OutboundCall) -> Result<UpstreamResponse, TransportError> {
///         // Send the request, read the body as text
///     }
/// }
/// ```
#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    async fn execute(&self, call: &OutboundCall) -> Result<UpstreamResponse, TransportError>;
}
