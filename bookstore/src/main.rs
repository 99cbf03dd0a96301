use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use bookstore::{app, config::Config, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    telemetry::init(config.log_format);

    let store = Arc::new(app::connect_store(&config).await?);
    tokio::spawn(app::probe_store(store.clone()));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app::build_app(store.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    match Arc::try_unwrap(store) {
        Ok(store) => store.shutdown().await?,
        Err(_) => warn!("storage backend still in use; skipping backend shutdown"),
    }

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }

    info!("shutdown signal received");
}
