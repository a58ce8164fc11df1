use axum::Router;
use log::{error, info, warn};
use std::io;
use std::net::SocketAddr;
use std::path::Path;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::protocol::build_router;
use crate::storage::PathGateway;

pub struct Server {
    listener: TcpListener,
    router: Router,
    config: ServerConfig,
}

impl Server {
    pub async fn new(config: ServerConfig) -> io::Result<Self> {
        prepare_root(&config.root_path_buf())?;

        let addr = config.listen_addr();
        let listener = match TcpListener::bind(&addr).await {
            Ok(listener) => {
                info!("Server bound to {}", addr);
                listener
            }
            Err(e) => {
                error!("Failed to bind to {}: {}", addr, e);
                return Err(e);
            }
        };

        let router = build_router(PathGateway::from_config(&config));

        Ok(Self {
            listener,
            router,
            config,
        })
    }

    /// Address actually bound, useful when the configured port is 0
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub async fn start(self) -> io::Result<()> {
        info!(
            "Serving {} on http://{} (containment {}, renames relative to {:?})",
            self.config.root_path,
            self.local_addr()?,
            if self.config.enforce_containment { "on" } else { "off" },
            self.config.rename_base,
        );

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

/// Ensures the root exists and is a directory
fn prepare_root(root: &Path) -> io::Result<()> {
    if !root.exists() {
        warn!("Root directory {} missing; creating it", root.display());
        std::fs::create_dir_all(root)?;
    }

    if !root.is_dir() {
        return Err(io::Error::other(format!(
            "root path {} is not a directory",
            root.display()
        )));
    }

    info!("Root directory: {}", root.display());
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for ctrl-c: {}", e);
        return;
    }
    info!("ctrl-c received; shutting down");
}
