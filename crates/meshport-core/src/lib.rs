//! Meshport Core Library
//!
//! This crate provides configuration, error types, and request/response models
//! that are shared across all Meshport components.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{BaseConfig, Config, ServiceConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
