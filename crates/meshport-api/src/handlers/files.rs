//! Retrieval of stored uploads and exports.

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::content_type_for;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, Response, StatusCode},
};
use futures::StreamExt;
use meshport_core::AppError;
use meshport_storage::{Storage, StorageError};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/uploads/{filename}",
    tag = "files",
    params(
        ("filename" = String, Path, description = "Sanitized name returned by the upload")
    ),
    responses(
        (status = 200, description = "Uploaded file", content_type = "model/stl"),
        (status = 404, description = "File not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "download_upload"))]
pub async fn download_upload(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response<Body>, HttpAppError> {
    stream_file(state.uploads.as_ref(), &filename, "File not found").await
}

#[utoipa::path(
    get,
    path = "/exports/{filename}",
    tag = "files",
    params(
        ("filename" = String, Path, description = "Export name returned by the conversion")
    ),
    responses(
        (status = 200, description = "Exported OBJ file", content_type = "model/obj"),
        (status = 404, description = "Exported file not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "download_export"))]
pub async fn download_export(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response<Body>, HttpAppError> {
    stream_file(state.exports.as_ref(), &filename, "Exported file not found").await
}

/// Stream `filename` out of `storage`. Names that do not resolve to a stored file inside the
/// directory, including traversal attempts, are reported as `not_found`.
async fn stream_file(
    storage: &dyn Storage,
    filename: &str,
    not_found: &str,
) -> Result<Response<Body>, HttpAppError> {
    let (size, stream) = storage.get_stream(filename).await.map_err(|e| match e {
        StorageError::NotFound(_) | StorageError::InvalidKey(_) => {
            HttpAppError(AppError::NotFound(not_found.to_string()))
        }
        other => other.into(),
    })?;

    tracing::debug!(filename = %filename, size_bytes = size, "Streaming stored file");

    // Wrap storage stream for axum Body
    let body_stream = stream.map(|result| {
        result.map_err(|e| std::io::Error::other(format!("Storage stream error: {}", e)))
    });

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type_for(filename))
        .header(header::CONTENT_LENGTH, size)
        .body(Body::from_stream(body_stream))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))?;

    Ok(response)
}
