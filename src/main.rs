mod api_doc;
mod config;
mod error;
mod handlers;
mod response;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;
use store::RedisStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run().await {
        tracing::error!("Fatal: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    tracing::info!("state-proxy starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = RedisStore::from_config(&config).await?;
    let app = routes::build_router(AppState::new(store));

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind listener on {}", addr))?;

    tracing::info!("Starting server on {}", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("state-proxy stopped");
    Ok(())
}

/// Resolves on SIGINT or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
