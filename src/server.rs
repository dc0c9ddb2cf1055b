//! HTTP server initialization and runtime setup.
//!
//! Wires the JSON-file store into the link service and runs the Axum server.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::repositories::LinkStore;
use crate::infrastructure::persistence::JsonFileLinkStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - JSON-file link store (bootstrapped empty on first run)
/// - Link allocation/resolution service
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The data file exists but cannot be read or decoded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = JsonFileLinkStore::new(config.data_file.clone());

    // Load once at startup: bootstraps the empty file on first run and
    // surfaces an unreadable or corrupt store before accepting traffic.
    let mapping = store.load().await?;
    tracing::info!(
        "Link store ready at {} ({} links)",
        config.data_file.display(),
        mapping.len()
    );

    let link_service = Arc::new(LinkService::new(Arc::new(store)));
    let state = AppState { link_service };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
