use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, Json};
use meshport_core::models::{ConvertRequest, ConvertResponse};
use meshport_processing::convert_pipeline;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/convert",
    tag = "conversion",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Conversion successful", body = ConvertResponse),
        (status = 400, description = "Missing or non-STL filename, or malformed body", body = ErrorResponse),
        (status = 404, description = "STL file not found", body = ErrorResponse),
        (status = 500, description = "Source unreadable, unsupported geometry or write failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request),
    fields(filename = ?request.filename, operation = "convert_file")
)]
pub async fn convert_file(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<ConvertRequest>,
) -> Result<Json<ConvertResponse>, HttpAppError> {
    let outcome = convert_pipeline(
        request.filename.as_deref(),
        state.uploads.as_ref(),
        state.exports.as_ref(),
        &state.converter,
        &state.locks,
    )
    .await?;

    Ok(Json(ConvertResponse::new(outcome.export_name)))
}
