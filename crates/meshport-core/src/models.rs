//! Request and response bodies for the HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Returned after a file has been stored in the upload directory
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub message: String,
    /// Sanitized name the file was stored under
    pub filename: String,
}

impl UploadResponse {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            message: "File uploaded successfully.".to_string(),
            filename: filename.into(),
        }
    }
}

/// Body of `POST /convert`
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ConvertRequest {
    /// Name of a previously uploaded `.stl` file
    #[serde(default)]
    pub filename: Option<String>,
}

/// Returned after a successful STL to OBJ conversion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConvertResponse {
    pub message: String,
    /// Name of the generated file in the export directory
    pub obj_filename: String,
}

impl ConvertResponse {
    pub fn new(obj_filename: impl Into<String>) -> Self {
        Self {
            message: "Conversion successful.".to_string(),
            obj_filename: obj_filename.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_request_accepts_missing_filename() {
        let req: ConvertRequest = serde_json::from_str("{}").unwrap();
        assert!(req.filename.is_none());

        let req: ConvertRequest = serde_json::from_str(r#"{"filename": "cube.stl"}"#).unwrap();
        assert_eq!(req.filename.as_deref(), Some("cube.stl"));
    }

    #[test]
    fn test_response_shapes() {
        let json = serde_json::to_value(UploadResponse::new("cube.stl")).unwrap();
        assert_eq!(json["filename"], "cube.stl");
        assert_eq!(json["message"], "File uploaded successfully.");

        let json = serde_json::to_value(ConvertResponse::new("cube.obj")).unwrap();
        assert_eq!(json["obj_filename"], "cube.obj");
        assert_eq!(json["message"], "Conversion successful.");
    }
}
