//! Normalized error body

use serde::Serialize;
use utoipa::ToSchema;

/// Shape of every failure response. Upstream JSON error bodies are passed
/// through untouched and may carry other fields instead.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    /// Failure diagnostics, present only when diagnostics are exposed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traceback: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            traceback: None,
        }
    }
}
