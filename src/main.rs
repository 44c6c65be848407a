use rejestr::server::{build_router, get_configuration, init_tracing};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info");

    let configuration =
        get_configuration().map_err(|e| anyhow::anyhow!("configuration error: {e}"))?;
    let address = configuration.server.address();

    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("failed to bind to {address}: {e}")
    })?;

    info!("Starting rejestr on {}", address);
    axum::serve(listener, build_router()).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("server error: {e}")
    })?;

    Ok(())
}
