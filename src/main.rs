use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shipping_quote::api::{AppState, create_router};
use shipping_quote::config::ConfigLoader;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let loader = match env::var("SHIPPING_CONFIG_DIR") {
        Ok(dir) => {
            info!(config_dir = %dir, "Loading pricing configuration");
            ConfigLoader::load(&dir)
                .with_context(|| format!("failed to load configuration from {}", dir))?
        }
        Err(_) => {
            info!("SHIPPING_CONFIG_DIR not set; using built-in pricing");
            ConfigLoader::builtin()
        }
    };
    let config = loader.into_config();
    info!(
        known_zips = config.centroids().len(),
        dim_divisor = %config.pricing().dim_divisor_cm3_per_kg,
        "Configuration ready"
    );

    let app = create_router(AppState::new(config));

    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .context("BIND_ADDR must be a socket address such as 0.0.0.0:8080")?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Starting server on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
