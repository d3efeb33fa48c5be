//! Health check handler and response type.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Run an async check with timeout; returns status string "healthy", "timeout", or "{prefix}: {error}".
async fn run_check<F, E>(timeout: Duration, f: F, error_prefix: &str) -> String
where
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    match tokio::time::timeout(timeout, f).await {
        Ok(Ok(())) => "healthy".to_string(),
        Ok(Err(e)) => format!("{}: {}", error_prefix, e),
        Err(_) => "timeout".to_string(),
    }
}

#[derive(serde::Serialize)]
pub(super) struct HealthCheckResponse {
    pub status: String,
    pub uploads: String,
    pub exports: String,
}

/// Both storage directories must be usable for the service to be healthy.
pub(super) async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (uploads, exports) = tokio::join!(
        run_check(CHECK_TIMEOUT, state.uploads.health_check(), "unhealthy"),
        run_check(CHECK_TIMEOUT, state.exports.health_check(), "unhealthy"),
    );

    let healthy = uploads == "healthy" && exports == "healthy";
    if !healthy {
        tracing::error!(uploads = %uploads, exports = %exports, "Health check failed");
    }

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthCheckResponse {
            status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
            uploads,
            exports,
        }),
    )
}
