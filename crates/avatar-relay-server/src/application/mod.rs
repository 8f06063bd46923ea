//! Application Services (Use Cases)
//!
//! Orchestrates domain operations using ports.
//! Routes delegate to these services for business logic.

mod gateway;

pub use gateway::ForwardingGateway;
