//! Meshport Storage Library
//!
//! This crate provides the storage abstraction used for uploaded and exported meshes.
//!
//! # Key format
//!
//! Storage is flat: a key is a bare filename inside the backend's directory. Keys must be
//! non-empty, must not be `.` or `..`, and must not contain path separators or NUL bytes.
//! Key validation is centralized in the `keys` module so every operation applies the same
//! rules.

pub(crate) mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStorage;
pub use traits::{ByteStream, Storage, StorageError, StorageResult};
