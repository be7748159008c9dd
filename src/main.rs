// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::sample_data::seed_sample_scales;
use crate::application::scale_service::ScaleService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::memory_repository::InMemoryScaleRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let app_config = load_app_config()?;
    let reference_offset = app_config.reference_offset()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(InMemoryScaleRepository::new());

    // Create services (application layer)
    let scale_service = ScaleService::new(repository);
    if app_config.scale.seed_sample_data {
        let seeded = seed_sample_scales(&scale_service).await?;
        tracing::info!("Seeded {} sample scale records", seeded);
    }

    // Create application state
    let state = Arc::new(AppState {
        scale_service,
        reference_offset,
    });

    // Build router (presentation layer)
    let app = router(state);

    // Start server
    let addr = app_config.socket_addr()?;
    tracing::info!("Starting scale-tracker service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
