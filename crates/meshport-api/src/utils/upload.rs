//! Common utilities for the upload and retrieval handlers

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;
use meshport_core::AppError;

/// Longest filename kept after sanitizing, in bytes
const MAX_FILENAME_LENGTH: usize = 255;

/// The `file` part of a multipart upload
#[derive(Debug)]
pub struct UploadedFile {
    pub data: Bytes,
    /// Client-supplied filename, unsanitized. May be empty.
    pub filename: String,
}

fn multipart_error(context: &str, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("{}: {}", context, err.body_text()))
    } else {
        AppError::InvalidInput(format!("{}: {}", context, err.body_text()))
    }
}

/// Extract the single field named "file" from a multipart form.
/// Multiple file fields are rejected; other fields are ignored. A "file" field without a
/// `filename` parameter is a plain form value, not a file, and is ignored too.
pub async fn extract_multipart_file(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart", e))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };

        if file.is_some() {
            return Err(AppError::InvalidInput(
                "Multiple file fields are not allowed; send exactly one field named 'file'"
                    .to_string(),
            ));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read file data", e))?;

        file = Some(UploadedFile { data, filename });
    }

    file.ok_or_else(|| AppError::InvalidInput("No file provided.".to_string()))
}

/// Reduce a client filename to a safe flat name.
///
/// Only the last path component survives; whitespace runs become `_`; anything other than
/// ASCII alphanumerics, `.`, `_` and `-` is dropped; leading and trailing `.`/`_` are
/// stripped. The result may be empty, which callers must reject.
pub fn sanitize_filename(filename: &str) -> String {
    // Path separators become spaces so the components they joined stay separated.
    let spaced: String = filename
        .chars()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    let trimmed = kept.trim_matches(|c| c == '.' || c == '_');

    let mut name = trimmed.to_string();
    if name.len() > MAX_FILENAME_LENGTH {
        // ASCII only at this point, so any byte index is a char boundary.
        name.truncate(MAX_FILENAME_LENGTH);
    }
    name
}

/// Content type served for a stored file, from its extension
pub fn content_type_for(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("stl") => "model/stl",
        Some("obj") => "model/obj",
        _ => "application/octet-stream",
    }
}
