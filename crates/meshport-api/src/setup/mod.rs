//! Application setup and initialization
//!
//! Startup order: validate configuration, start logging, open storage, build state, wire
//! routes. Integration tests reuse the later steps with their own state.

pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use meshport_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;

    crate::telemetry::init_telemetry()
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(
        environment = %config.environment(),
        "Configuration loaded and validated successfully"
    );

    let (uploads, exports) = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState::new(config.clone(), uploads, exports));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
