//! Meshport Processing Library
//!
//! STL to OBJ conversion: filename rules, mesh decoding through `stl_io`, geometry checks,
//! OBJ encoding, and the storage-to-storage conversion pipeline with per-name locking.

pub mod converter;
pub mod filename;
pub mod locks;
pub mod mesh;
pub mod pipeline;

pub use converter::{ConversionError, StlToObjConverter};
pub use filename::{export_name_for, FilenameError};
pub use locks::ConversionLocks;
pub use mesh::{MeshStats, ObjOptions};
pub use pipeline::{convert_pipeline, ConversionOutcome, PipelineError};
