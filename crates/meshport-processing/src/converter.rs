//! STL to OBJ conversion over in-memory bytes

use crate::mesh::{check_geometry, decode_stl, encode_obj, MeshStats, ObjOptions};

/// Closed set of conversion failures
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The source could not be read or is not decodable as STL
    #[error("{0}")]
    SourceUnreadable(String),

    /// The source decoded, but the mesh cannot be exported
    #[error("{0}")]
    UnsupportedGeometry(String),

    /// The converted mesh could not be written
    #[error("{0}")]
    WriteFailed(String),
}

/// Converts STL bytes into OBJ text
#[derive(Debug, Clone, Default)]
pub struct StlToObjConverter {
    options: ObjOptions,
}

impl StlToObjConverter {
    pub fn new(options: ObjOptions) -> Self {
        Self { options }
    }

    /// Decode `data`, check the geometry and encode it as OBJ with object name `name`.
    ///
    /// CPU-bound; call from `spawn_blocking` when running on the async runtime.
    pub fn convert(&self, data: &[u8], name: &str) -> Result<(String, MeshStats), ConversionError> {
        let mesh = decode_stl(data).map_err(|e| {
            ConversionError::SourceUnreadable(format!("Unable to read STL data: {}", e))
        })?;

        check_geometry(&mesh).map_err(|e| {
            ConversionError::UnsupportedGeometry(format!("Unsupported mesh geometry: {}", e))
        })?;

        let stats = MeshStats::of(&mesh);
        let obj = encode_obj(&mesh, name, &self.options);

        Ok((obj, stats))
    }
}
