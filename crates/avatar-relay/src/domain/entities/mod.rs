//! Domain Entities
//!
//! Request-scoped models; nothing here outlives a single inbound request.
//! - OutboundCall: request sent to an upstream
//! - UpstreamResponse: raw status and body received back
//! - ChatRequest / ChatPayload: inbound chat and its forwarded form
//! - NormalizedResult: caller-facing outcome of a call

mod chat;
mod normalized_result;
mod outbound_call;
mod upstream_response;

pub use chat::*;
pub use normalized_result::*;
pub use outbound_call::*;
pub use upstream_response::*;
