//! Domain Services
//!
//! Stateless logic shared by every relayed operation.

mod normalization;

pub use normalization::*;
