use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::{extract_multipart_file, sanitize_filename};
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use meshport_core::models::UploadResponse;
use meshport_core::AppError;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/upload",
    tag = "files",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File uploaded successfully", body = UploadResponse),
        (status = 400, description = "No file, empty or invalid filename", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_file"))]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    // A body that is not multipart at all carries no file part either.
    let multipart =
        multipart.map_err(|_| AppError::InvalidInput("No file provided.".to_string()))?;
    let file = extract_multipart_file(multipart).await?;

    let original = file.filename.as_str();
    if original.is_empty() {
        return Err(AppError::InvalidInput("No file selected.".to_string()).into());
    }

    let filename = sanitize_filename(original);
    if filename.is_empty() {
        return Err(AppError::InvalidInput(format!("Invalid filename: {}", original)).into());
    }

    let size_bytes = state.uploads.put(&filename, file.data).await?;

    tracing::info!(
        filename = %filename,
        original_filename = %original,
        size_bytes,
        "File uploaded"
    );

    Ok(Json(UploadResponse::new(filename)))
}
