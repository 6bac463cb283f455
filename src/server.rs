//! HTTP server startup.

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{AppState, create_router};
use crate::config::ServerConfig;
use crate::error::EngineResult;

/// Binds the configured address and serves the API until Ctrl-C.
///
/// Each call starts with an empty receipt store.
pub async fn serve(config: &ServerConfig) -> EngineResult<()> {
    let addr = config.socket_addr()?;
    let app = create_router(AppState::in_memory());

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "receipt processor ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("receipt processor stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // no signal handler available; run until the process is killed
        std::future::pending::<()>().await;
    }
}
