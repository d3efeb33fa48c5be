//! Key validation shared by all storage operations.

use crate::traits::{StorageError, StorageResult};

/// Check that `key` names a file directly inside the storage directory.
pub fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey("Storage key is empty".to_string()));
    }

    if key == "." || key == ".." {
        return Err(StorageError::InvalidKey(format!(
            "Storage key contains path traversal: {}",
            key
        )));
    }

    if key.contains(['/', '\\', '\0']) {
        return Err(StorageError::InvalidKey(format!(
            "Storage key contains invalid characters: {}",
            key
        )));
    }

    Ok(())
}
