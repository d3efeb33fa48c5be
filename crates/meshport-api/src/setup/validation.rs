//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use meshport_core::Config;

/// Largest body limit accepted without a warning, in MB
const LARGE_UPLOAD_WARN_MB: usize = 1024;

/// Validate critical configuration values
///
/// Hard errors come from [`Config::validate`]; this adds startup warnings for settings that
/// are legal but probably unintended.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if !config.is_production() {
        tracing::warn!(
            environment = %config.environment(),
            "Not running in production mode - error details are exposed"
        );
    }

    let max_upload_mb = config.max_upload_size_bytes() / 1024 / 1024;
    if max_upload_mb > LARGE_UPLOAD_WARN_MB {
        tracing::warn!(
            max_upload_mb,
            "MAX_UPLOAD_SIZE_MB is very high - uploads and conversions are held fully in memory"
        );
    }

    tracing::info!("Configuration validation passed");
    Ok(())
}
