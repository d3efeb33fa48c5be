//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use meshport_core::models;

/// Returns the OpenAPI spec served at `/api/openapi.json`.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Meshport API",
        version = "0.1.0",
        description = "Upload STL meshes, convert them to Wavefront OBJ and download either file."
    ),
    paths(
        handlers::upload::upload_file,
        handlers::files::download_upload,
        handlers::convert::convert_file,
        handlers::files::download_export,
    ),
    components(schemas(
        models::UploadResponse,
        models::ConvertRequest,
        models::ConvertResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "files", description = "Upload and retrieval of stored meshes"),
        (name = "conversion", description = "STL to OBJ conversion")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_lists_every_route() {
        let spec = get_openapi_spec();
        for path in ["/upload", "/uploads/{filename}", "/convert", "/exports/{filename}"] {
            assert!(spec.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
