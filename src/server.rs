//! HTTP server initialization and runtime setup.
//!
//! Handles the store connection, state construction, and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::{DocumentStore, MongoChoreographyRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the process-wide document store.
///
/// Missing settings or an unparseable connection string leave the store
/// without a database handle instead of aborting startup; the reason is
/// kept for `GET /test`. An unreachable server is only
/// logged; the driver keeps retrying on later operations.
pub async fn connect_store(config: &Config) -> DocumentStore {
    let (Some(url), Some(name)) = (&config.database_url, &config.database_name) else {
        tracing::warn!("DATABASE_URL or DATABASE_NAME not set. Running without a database.");
        return DocumentStore::disconnected();
    };

    let store = match DocumentStore::connect(url, name, &config.store_options()).await {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!(
                "Failed to configure database client: {}. Running without a database.",
                e
            );
            return DocumentStore::failed(e.to_string());
        }
    };

    match store.ping().await {
        Ok(()) => tracing::info!(database = %name, "Connected to database"),
        Err(e) => tracing::warn!(database = %name, "Database ping failed: {}", e),
    }

    store
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(connect_store(&config).await);
    let repository = Arc::new(MongoChoreographyRepository::new(store));

    let state = AppState::new(repository, config.store_presence());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
