//! Storage setup and initialization

use anyhow::{Context, Result};
use meshport_core::Config;
use meshport_storage::{LocalStorage, Storage};
use std::sync::Arc;

/// Open the upload and export directories, creating them if absent.
pub async fn setup_storage(config: &Config) -> Result<(Arc<dyn Storage>, Arc<dyn Storage>)> {
    tracing::info!("Initializing storage directories...");

    let uploads = LocalStorage::new(config.upload_dir())
        .await
        .with_context(|| format!("Failed to open upload directory {}", config.upload_dir().display()))?;
    let exports = LocalStorage::new(config.export_dir())
        .await
        .with_context(|| format!("Failed to open export directory {}", config.export_dir().display()))?;

    tracing::info!(
        uploads = %uploads.base_path().display(),
        exports = %exports.base_path().display(),
        "Storage initialized successfully"
    );

    Ok((Arc::new(uploads), Arc::new(exports)))
}
