//! Mesh decoding, geometry checks and OBJ encoding

pub mod obj;
pub mod stl;

pub use obj::{encode_obj, ObjOptions};
pub use stl::{check_geometry, decode_stl, GeometryError};

/// Size of a decoded mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshStats {
    pub vertices: usize,
    pub faces: usize,
}

impl MeshStats {
    pub fn of(mesh: &stl_io::IndexedMesh) -> Self {
        Self {
            vertices: mesh.vertices.len(),
            faces: mesh.faces.len(),
        }
    }
}
