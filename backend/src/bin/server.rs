//! Health Matters HTTP Server Binary
//!
//! This is the main entry point for the dashboard REST API server.
//! It loads the visitor-count dataset and the image listing once, sets up the
//! HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! DASHBOARD_CSV=./export.csv DASHBOARD_IMAGES=./resources \
//!   cargo run --bin health-matters-server
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_CONFIG`: Path of a `dashboard.toml` (default: searched)
//! - `DASHBOARD_CSV`: Visitor-count CSV (default: export.csv)
//! - `DASHBOARD_IMAGES`: Snapshot directory (default: ./resources/)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8050)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use health_matters::config::DashboardConfig;
use health_matters::db;
use health_matters::http::{create_router, AppState};
use health_matters::services::ImageCatalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Health Matters HTTP Server");

    let config = DashboardConfig::load().context("Failed to load configuration")?;

    // Load the dataset once; it is read-only from here on
    db::init_repository(&config.dataset.csv_path)?;
    let repository = Arc::clone(db::get_repository()?);
    info!(
        "Dataset loaded from {} ({} records)",
        config.dataset.csv_path.display(),
        repository.record_count().await?
    );

    let images = ImageCatalog::scan(&config.images).with_context(|| {
        format!(
            "Failed to list image directory {}",
            config.images.directory.display()
        )
    })?;
    info!("{} camera images available", images.files().len());

    // Create application state
    let state = AppState::new(repository, images, &config);

    // Create router with all endpoints
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
