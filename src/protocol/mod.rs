//! HTTP protocol layer
//!
//! Request schemas, response bodies, endpoint handlers and the router that
//! ties them to the path gateway.

pub mod handlers;
pub mod requests;
pub mod responses;
pub mod router;

pub use handlers::AppState;
pub use router::build_router;
