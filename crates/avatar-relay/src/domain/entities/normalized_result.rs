//! NormalizedResult - The four ways an outbound call can end

use serde_json::{json, Value};

/// Outcome of an outbound call, already shaped for the caller.
///
/// Callers must handle every variant; there is no catch-all failure path.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedResult {
    /// Upstream answered 2xx with JSON, returned verbatim with 200
    Success { body: Value },
    /// Upstream answered non-2xx; its status is passed through
    UpstreamError { status: u16, body: Value },
    /// Upstream did not answer within the call's timeout
    Timeout { message: String },
    /// Anything else: connect failure, unreadable or malformed response
    TransportFailure {
        message: String,
        trace: Option<String>,
    },
}

impl NormalizedResult {
    pub const TIMEOUT_STATUS: u16 = 504;
    pub const FAILURE_STATUS: u16 = 500;

    pub fn status(&self) -> u16 {
        match self {
            NormalizedResult::Success { .. } => 200,
            NormalizedResult::UpstreamError { status, .. } => *status,
            NormalizedResult::Timeout { .. } => Self::TIMEOUT_STATUS,
            NormalizedResult::TransportFailure { .. } => Self::FAILURE_STATUS,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, NormalizedResult::Success { .. })
    }

    /// JSON body returned to the caller
    pub fn into_body(self) -> Value {
        match self {
            NormalizedResult::Success { body } | NormalizedResult::UpstreamError { body, .. } => {
                body
            }
            NormalizedResult::Timeout { message } => json!({ "error": message }),
            NormalizedResult::TransportFailure {
                message,
                trace: Some(trace),
            } => json!({ "error": message, "traceback": trace }),
            NormalizedResult::TransportFailure {
                message,
                trace: None,
            } => json!({ "error": message }),
        }
    }
}
