//! Error types module
//!
//! All failures that reach the HTTP surface are unified under [`AppError`]. Each variant
//! describes its own presentation through [`ErrorMetadata`], so the API layer only has to
//! render what the error reports about itself.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for failures caused by the submitted data
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "NOT_FOUND")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from clients
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Source unreadable: {0}")]
    SourceUnreadable(String),

    #[error("Unsupported geometry: {0}")]
    UnsupportedGeometry(String),

    #[error("Conversion write failed: {0}")]
    ConversionWriteFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Static metadata for each variant: (http_status, error_code, sensitive, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, LogLevel) {
    match err {
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", false, LogLevel::Debug),
        AppError::NotFound(_) => (404, "NOT_FOUND", false, LogLevel::Debug),
        AppError::PayloadTooLarge(_) => (413, "PAYLOAD_TOO_LARGE", false, LogLevel::Debug),
        AppError::Storage(_) => (500, "STORAGE_ERROR", true, LogLevel::Error),
        AppError::SourceUnreadable(_) => (500, "SOURCE_UNREADABLE", false, LogLevel::Warn),
        AppError::UnsupportedGeometry(_) => (500, "UNSUPPORTED_GEOMETRY", false, LogLevel::Warn),
        AppError::ConversionWriteFailed(_) => {
            (500, "CONVERSION_WRITE_FAILED", false, LogLevel::Error)
        }
        AppError::Internal(_) => (500, "INTERNAL_ERROR", true, LogLevel::Error),
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg)
            | AppError::NotFound(msg)
            | AppError::PayloadTooLarge(msg) => msg.clone(),
            // Conversion failures surface the underlying library message verbatim.
            AppError::SourceUnreadable(msg)
            | AppError::UnsupportedGeometry(msg)
            | AppError::ConversionWriteFailed(msg) => msg.clone(),
            AppError::Storage(_) => "Storage operation failed".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }
}

impl AppError {
    /// Variant name, used as a structured logging field
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::NotFound(_) => "NotFound",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Storage(_) => "Storage",
            AppError::SourceUnreadable(_) => "SourceUnreadable",
            AppError::UnsupportedGeometry(_) => "UnsupportedGeometry",
            AppError::ConversionWriteFailed(_) => "ConversionWriteFailed",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Internal message, including the variant prefix
    pub fn detailed_message(&self) -> String {
        self.to_string()
    }
}
