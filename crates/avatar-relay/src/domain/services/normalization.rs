//! Error normalization
//!
//! Turns the raw outcome of an outbound call into a [`NormalizedResult`].
//! Applied identically to every operation that calls an upstream.

use serde_json::{json, Value};

use crate::domain::entities::{NormalizedResult, UpstreamResponse};
use crate::domain::value_objects::{DiagnosticPolicy, Operation};
use crate::ports::TransportError;

/// Normalize the outcome of one outbound call.
///
/// 1. Timeout → 504 with a timeout message
/// 2. Non-2xx → upstream status, upstream JSON body or `{"error": text}`
/// 3. Transport failure or non-JSON success body → 500
/// 4. Otherwise → 200 with the upstream JSON
pub fn normalize(
    operation: Operation,
    outcome: Result<UpstreamResponse, TransportError>,
    policy: DiagnosticPolicy,
) -> NormalizedResult {
    let response = match outcome {
        Ok(response) => response,
        Err(TransportError::Timeout(detail)) => {
            return NormalizedResult::Timeout {
                message: operation.timeout_message(&detail),
            };
        }
        Err(err) => return transport_failure(operation, &err, policy),
    };

    if !response.is_success() {
        return NormalizedResult::UpstreamError {
            status: response.status,
            body: upstream_error_body(operation, &response.body),
        };
    }

    match serde_json::from_str::<Value>(&response.body) {
        Ok(body) => NormalizedResult::Success { body },
        Err(e) => {
            let err = TransportError::failure(format!("Invalid JSON in upstream response: {}", e));
            transport_failure(operation, &err, policy)
        }
    }
}

fn transport_failure(
    operation: Operation,
    err: &TransportError,
    policy: DiagnosticPolicy,
) -> NormalizedResult {
    NormalizedResult::TransportFailure {
        message: err.to_string(),
        trace: policy
            .exposes_trace(operation)
            .then(|| err.diagnostic()),
    }
}

fn upstream_error_body(operation: Operation, text: &str) -> Value {
    if text.is_empty() && operation.wraps_empty_error_body() {
        return json!({ "error": text });
    }

    serde_json::from_str::<Value>(text).unwrap_or_else(|_| json!({ "error": text }))
}
