//! Operation - The inbound routes the relay serves

use super::upstream::Upstream;

/// One inbound route of the relay.
///
/// Every operation except `HealthCheck` maps to exactly one outbound call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    HealthCheck,
    IssueStreamingToken,
    ListAllAvatars,
    ListInteractiveAvatars,
    ListVoices,
    Chat,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::HealthCheck,
        Operation::IssueStreamingToken,
        Operation::ListAllAvatars,
        Operation::ListInteractiveAvatars,
        Operation::ListVoices,
        Operation::Chat,
    ];

    /// Inbound route path
    pub fn route(&self) -> &'static str {
        match self {
            Operation::HealthCheck => "/",
            Operation::IssueStreamingToken => "/streaming_token",
            Operation::ListAllAvatars => "/avatars",
            Operation::ListInteractiveAvatars => "/interactive_avatars",
            Operation::ListVoices => "/voices",
            Operation::Chat => "/chat",
        }
    }

    /// Upstream this operation forwards to, `None` for the health check
    pub fn upstream(&self) -> Option<Upstream> {
        match self {
            Operation::HealthCheck => None,
            Operation::Chat => Some(Upstream::Chat),
            _ => Some(Upstream::Avatar),
        }
    }

    /// Path relative to the avatar provider's base URL
    ///
    /// The interactive list is its own endpoint, not a filter on `v2/avatars`.
    pub fn avatar_path(&self) -> Option<&'static str> {
        match self {
            Operation::IssueStreamingToken => Some("v1/streaming.create_token"),
            Operation::ListAllAvatars => Some("v2/avatars"),
            Operation::ListInteractiveAvatars => Some("v1/streaming/avatar.list"),
            Operation::ListVoices => Some("v2/voices"),
            Operation::HealthCheck | Operation::Chat => None,
        }
    }

    /// Body returned to the caller when the upstream exceeds its timeout
    pub fn timeout_message(&self, detail: &str) -> String {
        match self {
            Operation::Chat => format!(
                "Request timeout: {}. RAG API is taking too long to respond.",
                detail
            ),
            _ => format!("Request timeout: {}", detail),
        }
    }

    /// Whether an empty upstream error body is wrapped without a parse attempt
    pub fn wraps_empty_error_body(&self) -> bool {
        matches!(self, Operation::Chat)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::HealthCheck => "health_check",
            Operation::IssueStreamingToken => "issue_streaming_token",
            Operation::ListAllAvatars => "list_all_avatars",
            Operation::ListInteractiveAvatars => "list_interactive_avatars",
            Operation::ListVoices => "list_voices",
            Operation::Chat => "chat",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_routes_are_unique() {
        let routes: HashSet<_> = Operation::ALL.iter().map(|op| op.route()).collect();
        assert_eq!(routes.len(), Operation::ALL.len());
    }

    #[test]
    fn test_health_check_has_no_upstream() {
        assert_eq!(Operation::HealthCheck.upstream(), None);
        assert_eq!(Operation::HealthCheck.avatar_path(), None);
    }

    #[test]
    fn test_avatar_operations_have_paths() {
        for op in Operation::ALL {
            if op.upstream() == Some(Upstream::Avatar) {
                assert!(op.avatar_path().is_some(), "{} has no path", op);
            }
        }
    }

    #[test]
    fn test_interactive_avatars_use_distinct_endpoint() {
        assert_ne!(
            Operation::ListAllAvatars.avatar_path(),
            Operation::ListInteractiveAvatars.avatar_path()
        );
    }

    #[test]
    fn test_chat_timeout_message_mentions_rag() {
        let msg = Operation::Chat.timeout_message("deadline elapsed");
        assert!(msg.starts_with("Request timeout: deadline elapsed"));
        assert!(msg.contains("RAG API"));

        let msg = Operation::ListVoices.timeout_message("deadline elapsed");
        assert_eq!(msg, "Request timeout: deadline elapsed");
    }
}
