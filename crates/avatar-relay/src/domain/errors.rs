//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Inbound request is incomplete; never forwarded upstream
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Message suitable for the `error` field of a client-facing body
    pub fn client_message(&self) -> &str {
        match self {
            DomainError::Validation(msg) => msg,
        }
    }
}
