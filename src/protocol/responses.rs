//! HTTP response bodies
//!
//! Success bodies come straight from `storage::results`; this module adds
//! the service-level ones.

use serde::Serialize;

pub use crate::error::handlers::ErrorBody;
pub use crate::storage::results::{Message, PathContents};

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

impl Health {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
