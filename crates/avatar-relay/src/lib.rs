//! Avatar Relay Domain Library
//!
//! Core types for a proxy that forwards requests to a streaming-avatar
//! provider and a RAG chat provider, normalizing every outcome into one
//! response shape.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`)
//!   - `entities/`: `OutboundCall`, `UpstreamResponse`, `ChatRequest`, `NormalizedResult`
//!   - `value_objects/`: `Operation`, `Upstream`, `DiagnosticPolicy`
//!   - `services/`: the error-normalization routine
//!   - `errors/`: domain error types
//!
//! - **Ports** (`ports/`): the `UpstreamTransport` trait that performs calls
//!
//! # Usage
//!
//! ```rust,ignore
//! use avatar_relay::{normalize, DiagnosticPolicy, Operation, OutboundCall, UpstreamTransport};
//!
//! let outcome = transport.execute(&call).await;
//! let result = normalize(Operation::ListVoices, outcome, DiagnosticPolicy::ServerOnly);
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    normalize, ChatPayload, ChatRequest, DiagnosticPolicy, DomainError, HttpMethod,
    NormalizedResult, Operation, OutboundCall, Upstream, UpstreamResponse, MESSAGE_REQUIRED,
};
pub use ports::{TransportError, UpstreamTransport};
