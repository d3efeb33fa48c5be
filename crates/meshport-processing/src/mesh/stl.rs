//! STL decoding through `stl_io`, plus the checks a decoded mesh must pass before export.

use std::io::Cursor;
use stl_io::IndexedMesh;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("mesh has no faces")]
    Empty,

    #[error("face {face} references vertex {index} but the mesh has {count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        count: usize,
    },

    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },
}

/// Decode ASCII or binary STL bytes into an indexed mesh with shared vertices.
pub fn decode_stl(data: &[u8]) -> std::io::Result<IndexedMesh> {
    let mut cursor = Cursor::new(data);
    stl_io::read_stl(&mut cursor)
}

/// Reject meshes that cannot be written as a meaningful OBJ.
pub fn check_geometry(mesh: &IndexedMesh) -> Result<(), GeometryError> {
    if mesh.faces.is_empty() {
        return Err(GeometryError::Empty);
    }

    let count = mesh.vertices.len();
    for (face, tri) in mesh.faces.iter().enumerate() {
        if let Some(&index) = tri.vertices.iter().find(|&&i| i >= count) {
            return Err(GeometryError::IndexOutOfRange { face, index, count });
        }
    }

    for (index, v) in mesh.vertices.iter().enumerate() {
        if !(v[0].is_finite() && v[1].is_finite() && v[2].is_finite()) {
            return Err(GeometryError::NonFiniteVertex { index });
        }
    }

    Ok(())
}
