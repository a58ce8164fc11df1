//! Route table

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

use crate::middleware::logging::log_request;
use crate::protocol::handlers::{self, AppState};
use crate::storage::PathGateway;

pub fn build_router(gateway: PathGateway) -> Router {
    let state = AppState::new(gateway);

    Router::new()
        .route("/", get(handlers::get_contents))
        .route(
            "/file",
            post(handlers::create_file)
                .put(handlers::edit_file)
                .delete(handlers::delete_file),
        )
        .route(
            "/directory",
            post(handlers::create_directory)
                .put(handlers::edit_directory)
                .delete(handlers::delete_directory),
        )
        .route("/health", get(handlers::health))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
