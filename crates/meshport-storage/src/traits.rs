//! Storage abstraction trait
//!
//! This module defines the Storage trait that backs both the upload and the export
//! directories.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Chunked file content
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, StorageError>> + Send>>;

/// Storage abstraction trait
///
/// Keys are bare filenames; see the crate root documentation for the accepted format.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `data` under `key`, replacing any existing file. Returns the number of bytes
    /// written.
    ///
    /// Replacement is atomic: readers observe either the previous content or the new
    /// content, never a partial file.
    async fn put(&self, key: &str, data: Bytes) -> StorageResult<u64>;

    /// Read a whole file into memory
    async fn get(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Open a file as a chunked stream together with its length in bytes
    async fn get_stream(&self, key: &str) -> StorageResult<(u64, ByteStream)>;

    /// Check if a file exists
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Verify the backing location is usable
    async fn health_check(&self) -> StorageResult<()>;
}
