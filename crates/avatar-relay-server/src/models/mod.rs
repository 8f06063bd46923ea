//! Avatar Relay Data Models
//!
//! - ServiceDescriptor: health check payload
//! - ErrorBody: normalized failure shape

mod error;
mod health;

pub use error::*;
pub use health::*;
