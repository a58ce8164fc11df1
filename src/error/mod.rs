//! Error handling
//!
//! Defines the gateway error taxonomy and its HTTP mapping.

pub mod handlers;
pub mod types;

pub use types::*;
