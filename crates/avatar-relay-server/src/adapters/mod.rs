//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod http_transport;

// Re-exports
pub use http_transport::HttpTransport;
