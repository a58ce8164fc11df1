//! Path gateway
//!
//! Resolves client paths under the configured root and performs the
//! filesystem operations behind every endpoint.

pub mod filesystem;
pub mod operations;
pub mod permissions;
pub mod results;
pub mod validation;

pub use operations::PathGateway;
pub use results::{DirectoryEntry, Message, PathContents};
