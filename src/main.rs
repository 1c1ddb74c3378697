// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::application::dashboard_service::DashboardService;
use crate::application::dataset_source::DatasetSource;
use crate::infrastructure::config::{load_service_config, load_sites_config};
use crate::infrastructure::csv_dataset::CsvDatasetSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{apply_selection, current_dashboard, health_check, list_sites};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let service_config = load_service_config()?;
    let sites_config = load_sites_config()?;

    // Load the dataset once; a malformed dataset aborts startup
    let source = CsvDatasetSource::new(&service_config.dataset.path);
    let dataset = source
        .load(&sites_config)
        .context("failed to load launch dataset")?;
    tracing::info!(
        "loaded {} launch records (payload bounds {} .. {} kg)",
        dataset.len(),
        dataset.min_payload(),
        dataset.max_payload()
    );

    // Create the view controller (application layer)
    let controller = DashboardService::new(Arc::new(dataset), sites_config);

    // Create application state
    let state = Arc::new(AppState {
        controller: Mutex::new(controller),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/sites", get(list_sites))
        .route("/dashboard", get(current_dashboard))
        .route("/selection", post(apply_selection))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = service_config.server.bind.parse()?;
    println!("Starting launch-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
