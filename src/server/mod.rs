//! Server core functionality
//!
//! Binds the HTTP listener and serves the gateway router until shutdown.

pub mod core;

pub use core::Server;
