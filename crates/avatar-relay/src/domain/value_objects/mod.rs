//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod diagnostic_policy;
mod operation;
mod upstream;

pub use diagnostic_policy::*;
pub use operation::*;
pub use upstream::*;
