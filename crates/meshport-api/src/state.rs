//! Application state shared by all handlers.

use meshport_core::Config;
use meshport_processing::{ConversionLocks, ObjOptions, StlToObjConverter};
use meshport_storage::Storage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Uploaded STL files, keyed by sanitized filename
    pub uploads: Arc<dyn Storage>,
    /// Generated OBJ files, keyed by export name
    pub exports: Arc<dyn Storage>,
    pub converter: StlToObjConverter,
    pub locks: ConversionLocks,
}

impl AppState {
    pub fn new(config: Config, uploads: Arc<dyn Storage>, exports: Arc<dyn Storage>) -> Self {
        let converter = StlToObjConverter::new(ObjOptions {
            include_normals: config.obj_include_normals(),
        });

        Self {
            config,
            uploads,
            exports,
            converter,
            locks: ConversionLocks::new(),
        }
    }
}
