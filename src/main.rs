use anyhow::Context;
use tracing::info;

use order_desk::api::{build_router, AppState};
use order_desk::{setup_tracing, Config, OrderSystem};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    setup_tracing();

    let config = Config::from_env();
    info!(?config, "Starting order desk");

    let system = OrderSystem::new(&config);
    let app = build_router(AppState::from(&system));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    system.shutdown().await.context("store actor failed during shutdown")?;

    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
