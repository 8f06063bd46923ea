//! DiagnosticPolicy - Whether failure diagnostics reach the client

use super::operation::Operation;

/// Controls the `traceback` field on transport-failure responses.
///
/// Diagnostics are always logged server-side; this only decides whether
/// they are echoed back to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiagnosticPolicy {
    /// Never include diagnostics in responses
    #[default]
    ServerOnly,
    /// Include diagnostics for the streaming token and full avatar list only,
    /// matching the behaviour existing callers were built against
    Legacy,
}

impl DiagnosticPolicy {
    pub fn exposes_trace(&self, operation: Operation) -> bool {
        match self {
            DiagnosticPolicy::ServerOnly => false,
            DiagnosticPolicy::Legacy => matches!(
                operation,
                Operation::IssueStreamingToken | Operation::ListAllAvatars
            ),
        }
    }
}
