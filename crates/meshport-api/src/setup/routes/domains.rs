//! Route groups for stored files and conversion.

use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn file_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/upload", post(handlers::upload::upload_file))
        .route("/uploads/{filename}", get(handlers::files::download_upload))
        .route("/exports/{filename}", get(handlers::files::download_export))
}

pub fn conversion_routes() -> Router<Arc<AppState>> {
    Router::new().route("/convert", post(handlers::convert::convert_file))
}
