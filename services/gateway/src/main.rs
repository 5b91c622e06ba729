mod config;
mod error;
mod handlers;
mod metrics;
mod models;
mod router;
mod state;

use config::AppConfig;
use rate_engine::{RateTable, SystemClock};
use router::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load environment variables first
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "rates_gateway={level},rate_engine={level},tower_http=info",
                    level = config.log_level
                )
                .into()
            }),
        )
        .init();

    tracing::info!("Starting rates service");

    // Seed the rate table; a broken seed file stops startup
    let table = RateTable::from_seed_file(&config.seed_rate_file, Arc::new(SystemClock))?;
    let index = table.snapshot();
    tracing::info!(
        seed = %config.seed_rate_file.display(),
        rules = index.rule_count(),
        "Rate table ready"
    );

    let state = AppState::new(table);
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Rates service shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received, shutting down gracefully...");
}
