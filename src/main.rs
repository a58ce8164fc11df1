//! Filesystem gateway - Entry Point
//!
//! Serves a directory tree over HTTP: list, read, create, edit and delete
//! files and directories below a configured root.

use env_logger::Env;
use log::{error, info};
use std::process;

use fs_gateway::Server;
use fs_gateway::config::ServerConfig;

#[tokio::main]
async fn main() {
    // RUST_LOG overrides the default filter
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Launching filesystem gateway...");

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let server = match Server::new(config).await {
        Ok(server) => server,
        Err(e) => {
            error!("Server startup failed: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = server.start().await {
        error!("Server error: {}", e);
        process::exit(1);
    }
}
