//! Test fixtures: hand-built STL blobs.

/// Binary STL from a list of triangles, each given as three corners.
pub fn binary_stl(triangles: &[[[f32; 3]; 3]]) -> Vec<u8> {
    let mut stl = Vec::with_capacity(84 + triangles.len() * 50);

    let mut header = [0u8; 80];
    let label = b"meshport test fixture";
    header[..label.len()].copy_from_slice(label);
    stl.extend_from_slice(&header);
    stl.extend_from_slice(&(triangles.len() as u32).to_le_bytes());

    for triangle in triangles {
        // Zero normal; readers recompute it from the winding when needed.
        for _ in 0..3 {
            stl.extend_from_slice(&0f32.to_le_bytes());
        }
        for corner in triangle {
            for coord in corner {
                stl.extend_from_slice(&coord.to_le_bytes());
            }
        }
        stl.extend_from_slice(&0u16.to_le_bytes());
    }

    stl
}

/// Unit cube: 8 corners, 12 triangles.
pub fn cube_stl() -> Vec<u8> {
    let p = |x: f32, y: f32, z: f32| [x, y, z];
    let c = [
        p(0.0, 0.0, 0.0),
        p(1.0, 0.0, 0.0),
        p(1.0, 1.0, 0.0),
        p(0.0, 1.0, 0.0),
        p(0.0, 0.0, 1.0),
        p(1.0, 0.0, 1.0),
        p(1.0, 1.0, 1.0),
        p(0.0, 1.0, 1.0),
    ];
    let faces = [
        [0, 2, 1],
        [0, 3, 2],
        [4, 5, 6],
        [4, 6, 7],
        [0, 1, 5],
        [0, 5, 4],
        [1, 2, 6],
        [1, 6, 5],
        [2, 3, 7],
        [2, 7, 6],
        [3, 0, 4],
        [3, 4, 7],
    ];
    let triangles: Vec<[[f32; 3]; 3]> = faces
        .iter()
        .map(|&[a, b, c_]| [c[a], c[b], c[c_]])
        .collect();
    binary_stl(&triangles)
}

/// Well-formed STL with zero triangles.
pub fn empty_stl() -> Vec<u8> {
    binary_stl(&[])
}

/// Bytes that are not STL in either encoding.
pub fn corrupt_stl() -> Vec<u8> {
    b"definitely not a mesh".to_vec()
}

/// ASCII STL with a single triangle.
pub fn ascii_triangle_stl() -> Vec<u8> {
    b"solid tri
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid tri
"
    .to_vec()
}
