//! Server module for managing HTTP server lifecycle
//!
//! This module handles store setup, server startup, graceful shutdown and
//! closing the store afterwards.

use crate::api::routes::create_router;
use crate::config::{Environment, Settings};
use crate::db::establish_store;
use crate::state::AppState;
use tokio::net::TcpListener;
use tokio::signal;

/// HTTP server manager
pub struct Server {
    settings: Settings,
    environment: Environment,
}

impl Server {
    pub fn new(settings: Settings, environment: Environment) -> Self {
        Self {
            settings,
            environment,
        }
    }

    /// Start the server and run until shutdown signal
    ///
    /// This method:
    /// 1. Opens the configured store
    /// 2. Creates application state and the router
    /// 3. Binds to configured address
    /// 4. Serves with graceful shutdown
    /// 5. Closes the store
    ///
    /// # Errors
    /// - Store connection errors
    /// - Address binding errors
    /// - Server runtime errors
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::info!(
            app_name = %self.settings.application.name,
            app_version = %self.settings.application.version,
            environment = %self.environment,
            "Application starting"
        );

        // The connection string may carry credentials; log the target only.
        tracing::info!(
            backend = ?self.settings.store.backend,
            database = %self.settings.store.database,
            connect_timeout = self.settings.store.connect_timeout,
            "Store configuration loaded"
        );

        let store = establish_store(&self.settings.store).await.map_err(|e| {
            tracing::error!(error = %e.detail(), "Failed to open store");
            anyhow::anyhow!("Failed to open store: {}", e)
        })?;
        tracing::info!(backend = store.backend_name(), "Store ready");

        let router = create_router(AppState::new(store.clone()));

        let address = self.settings.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        tracing::info!(address = %address, "Server listening");

        let served = axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await;

        store.close().await;
        served?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
