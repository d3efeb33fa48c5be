//! Meshport API Library
//!
//! This crate provides the HTTP handlers and application setup for the STL upload,
//! conversion and retrieval service.

// Module declarations
mod api_doc;
mod handlers;
mod middleware;
mod telemetry;
mod utils;

// Public modules
pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
