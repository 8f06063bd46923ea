//! Chat - Inbound chat request and the payload forwarded to the RAG provider

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::errors::DomainError;

/// Error message returned when a chat request has no message
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Chat request as received from the caller
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// User message; required and non-empty
    #[serde(default)]
    pub message: Option<String>,
    /// Conversation to continue, if any
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// Body sent to the RAG provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatPayload {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

impl ChatRequest {
    /// Validate and convert into the outbound payload.
    ///
    /// An empty `conversation_id` is dropped rather than forwarded.
    pub fn into_payload(self) -> Result<ChatPayload, DomainError> {
        let message = match self.message {
            Some(message) if !message.is_empty() => message,
            _ => return Err(DomainError::validation(MESSAGE_REQUIRED)),
        };

        Ok(ChatPayload {
            message,
            conversation_id: self.conversation_id.filter(|id| !id.is_empty()),
        })
    }
}
