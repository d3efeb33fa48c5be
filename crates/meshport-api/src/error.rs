//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`. Domain errors from the storage
//! and processing crates convert into `AppError` here, so every failure renders with the same
//! status mapping, body shape and log level.

use axum::{
    extract::rejection::JsonRejection,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use meshport_core::{AppError, ErrorMetadata, LogLevel};
use meshport_processing::{ConversionError, FilenameError, PipelineError};
use meshport_storage::StorageError;
use serde::{de::DeserializeOwned, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Machine-readable error code for programmatic handling
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            details: None,
        }
    }
}

/// Wrapper type for AppError to implement IntoResponse.
/// AppError lives in meshport-core, so the orphan rule requires a local type here.
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

/// Convert JSON body deserialization failures into a 400 with our ErrorResponse format.
impl From<JsonRejection> for HttpAppError {
    fn from(rejection: JsonRejection) -> Self {
        HttpAppError(AppError::InvalidInput(format!(
            "Invalid request body: {}",
            rejection.body_text()
        )))
    }
}

/// JSON body extractor that returns our ErrorResponse format (400 + JSON) on deserialization failure.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = HttpAppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(inner) = Json::<T>::from_request(req, state)
            .await
            .map_err(HttpAppError::from)?;
        Ok(ValidatedJson(inner))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Error occurred");
        }
    }
}

/// Internal detail of a non-sensitive error, carried in the response extensions.
///
/// The body is rendered without details; [`error_details_middleware`] adds them back when the
/// configured environment allows it.
///
/// [`error_details_middleware`]: crate::middleware::error_details_middleware
#[derive(Debug, Clone)]
pub struct ErrorDetailsExtension {
    pub body: ErrorResponse,
    pub details: String,
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let body = ErrorResponse::new(app_error.client_message(), app_error.error_code());
        let details = app_error.detailed_message();
        let extension = (!app_error.is_sensitive() && details != body.error).then(|| {
            ErrorDetailsExtension {
                body: body.clone(),
                details,
            }
        });

        let mut response = (status, Json(body)).into_response();
        if let Some(extension) = extension {
            response.extensions_mut().insert(extension);
        }
        response
    }
}

// Convert domain errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::NotFound(msg) => AppError::NotFound(msg),
            StorageError::InvalidKey(msg) => AppError::InvalidInput(msg),
            StorageError::WriteFailed(msg) => AppError::Storage(msg),
            StorageError::ReadFailed(msg) => AppError::Storage(msg),
            StorageError::IoError(err) => AppError::Storage(format!("IO error: {}", err)),
            StorageError::ConfigError(msg) => AppError::Internal(msg),
        };
        HttpAppError(app)
    }
}

impl From<FilenameError> for HttpAppError {
    fn from(_: FilenameError) -> Self {
        HttpAppError(AppError::InvalidInput("Invalid STL file".to_string()))
    }
}

impl From<ConversionError> for HttpAppError {
    fn from(err: ConversionError) -> Self {
        let app = match err {
            ConversionError::SourceUnreadable(msg) => AppError::SourceUnreadable(msg),
            ConversionError::UnsupportedGeometry(msg) => AppError::UnsupportedGeometry(msg),
            ConversionError::WriteFailed(msg) => AppError::ConversionWriteFailed(msg),
        };
        HttpAppError(app)
    }
}

impl From<PipelineError> for HttpAppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::InvalidFilename(e) => e.into(),
            PipelineError::SourceNotFound(_) => {
                HttpAppError(AppError::NotFound("STL file not found".to_string()))
            }
            PipelineError::Conversion(e) => e.into(),
            PipelineError::Storage(e) => e.into(),
            PipelineError::TaskFailed(msg) => HttpAppError(AppError::Internal(msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_storage_error_not_found() {
        let storage_err = StorageError::NotFound("File not found".to_string());
        let HttpAppError(app_err) = storage_err.into();
        match app_err {
            AppError::NotFound(msg) => assert_eq!(msg, "File not found"),
            _ => panic!("Expected NotFound variant"),
        }
    }

    #[test]
    fn test_from_storage_error_write_failed() {
        let storage_err = StorageError::WriteFailed("disk full".to_string());
        let HttpAppError(app_err) = storage_err.into();
        match app_err {
            AppError::Storage(msg) => assert_eq!(msg, "disk full"),
            _ => panic!("Expected Storage variant"),
        }
    }

    #[test]
    fn test_from_storage_error_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let HttpAppError(app_err) = StorageError::IoError(io_err).into();
        match app_err {
            AppError::Storage(msg) => assert!(msg.contains("denied")),
            _ => panic!("Expected Storage variant"),
        }
    }

    #[test]
    fn test_filename_errors_share_one_message() {
        for err in [FilenameError::Missing, FilenameError::NotStl("a.obj".into())] {
            let HttpAppError(app_err) = err.into();
            match app_err {
                AppError::InvalidInput(msg) => assert_eq!(msg, "Invalid STL file"),
                _ => panic!("Expected InvalidInput variant"),
            }
        }
    }

    #[test]
    fn test_from_pipeline_error_source_not_found() {
        let HttpAppError(app_err) = PipelineError::SourceNotFound("x.stl".into()).into();
        assert_eq!(app_err.http_status_code(), 404);
        assert_eq!(app_err.client_message(), "STL file not found");
    }

    #[test]
    fn test_conversion_errors_keep_message_and_code() {
        let cases = [
            (
                ConversionError::SourceUnreadable("bad header".into()),
                "SOURCE_UNREADABLE",
            ),
            (
                ConversionError::UnsupportedGeometry("no faces".into()),
                "UNSUPPORTED_GEOMETRY",
            ),
            (
                ConversionError::WriteFailed("read-only".into()),
                "CONVERSION_WRITE_FAILED",
            ),
        ];
        for (err, code) in cases {
            let message = err.to_string();
            let HttpAppError(app_err) = PipelineError::Conversion(err).into();
            assert_eq!(app_err.http_status_code(), 500);
            assert_eq!(app_err.error_code(), code);
            assert_eq!(app_err.client_message(), message);
        }
    }

    #[test]
    fn test_response_carries_details_only_for_non_sensitive_errors() {
        let response =
            HttpAppError(AppError::ConversionWriteFailed("read-only".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let extension = response
            .extensions()
            .get::<ErrorDetailsExtension>()
            .expect("details extension");
        assert_eq!(extension.details, "Conversion write failed: read-only");
        assert_eq!(extension.body.code, "CONVERSION_WRITE_FAILED");
        assert!(extension.body.details.is_none());

        let response = HttpAppError(AppError::Storage("disk full".into())).into_response();
        assert!(response.extensions().get::<ErrorDetailsExtension>().is_none());
    }

    #[test]
    fn test_error_response_shape() {
        let response = ErrorResponse::new("Exported file not found", "NOT_FOUND");
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(
            json.get("error").and_then(|v| v.as_str()),
            Some("Exported file not found")
        );
        assert_eq!(json.get("code").and_then(|v| v.as_str()), Some("NOT_FOUND"));
        assert!(json.get("details").is_none());
    }
}
