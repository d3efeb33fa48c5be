//! Conversion pipeline: validate name → locate source → lock → convert → store.
//!
//! Validation order matters to callers: a bad name is reported before the source is looked
//! up, so a wrongly suffixed name is rejected even when a file by that name exists.

use bytes::Bytes;
use meshport_storage::{Storage, StorageError};

use crate::converter::{ConversionError, StlToObjConverter};
use crate::filename::{export_name_for, stl_stem, FilenameError};
use crate::locks::ConversionLocks;
use crate::mesh::MeshStats;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    InvalidFilename(#[from] FilenameError),

    #[error("Source file not found: {0}")]
    SourceNotFound(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Conversion task failed: {0}")]
    TaskFailed(String),
}

/// Result of a successful conversion
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub source: String,
    pub export_name: String,
    pub stats: MeshStats,
    pub bytes_written: u64,
}

/// Convert the STL stored as `filename` in `uploads` and write the OBJ to `exports`.
pub async fn convert_pipeline(
    filename: Option<&str>,
    uploads: &dyn Storage,
    exports: &dyn Storage,
    converter: &StlToObjConverter,
    locks: &ConversionLocks,
) -> Result<ConversionOutcome, PipelineError> {
    let filename = filename.ok_or(FilenameError::Missing)?;
    let export_name = export_name_for(filename)?;
    let object_name = stl_stem(filename)?.to_string();

    match uploads.exists(filename).await {
        Ok(true) => {}
        Ok(false) | Err(StorageError::InvalidKey(_)) => {
            return Err(PipelineError::SourceNotFound(filename.to_string()));
        }
        Err(e) => return Err(e.into()),
    }

    let _guard = locks.acquire(&export_name).await;
    let start = std::time::Instant::now();

    let data = uploads.get(filename).await.map_err(|e| match e {
        StorageError::NotFound(_) => PipelineError::SourceNotFound(filename.to_string()),
        other => ConversionError::SourceUnreadable(other.to_string()).into(),
    })?;
    let source_size = data.len();

    let worker = converter.clone();
    let (obj, stats) = tokio::task::spawn_blocking(move || worker.convert(&data, &object_name))
        .await
        .map_err(|e| PipelineError::TaskFailed(e.to_string()))??;

    let bytes_written = exports
        .put(&export_name, Bytes::from(obj))
        .await
        .map_err(|e| ConversionError::WriteFailed(e.to_string()))?;

    tracing::info!(
        source = %filename,
        export = %export_name,
        source_bytes = source_size,
        export_bytes = bytes_written,
        vertices = stats.vertices,
        faces = stats.faces,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Conversion completed"
    );

    Ok(ConversionOutcome {
        source: filename.to_string(),
        export_name,
        stats,
        bytes_written,
    })
}
