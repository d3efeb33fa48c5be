//! Wavefront OBJ encoding for indexed triangle meshes.

use stl_io::IndexedMesh;

/// Options for OBJ output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjOptions {
    /// Emit one `vn` per face and reference it from the face (`f a//n b//n c//n`).
    pub include_normals: bool,
}

/// Encode `mesh` as OBJ text. `name` becomes the object name (`o` statement).
///
/// Indices in the output are 1-based. The mesh is expected to have passed
/// [`check_geometry`](super::check_geometry).
pub fn encode_obj(mesh: &IndexedMesh, name: &str, options: &ObjOptions) -> String {
    // ~40 bytes per vertex line, ~24 per face line
    let mut out = String::with_capacity(64 + mesh.vertices.len() * 40 + mesh.faces.len() * 24);

    out.push_str("# Exported by meshport\n");
    out.push_str(&format!("# vertices: {} faces: {}\n", mesh.vertices.len(), mesh.faces.len()));
    let object_name = name.trim();
    if !object_name.is_empty() {
        out.push_str(&format!("o {}\n", object_name.replace(char::is_whitespace, "_")));
    }

    for v in &mesh.vertices {
        out.push_str(&format!("v {:.6} {:.6} {:.6}\n", v[0], v[1], v[2]));
    }

    if options.include_normals {
        for face in &mesh.faces {
            let n = face_normal(mesh, face);
            out.push_str(&format!("vn {:.6} {:.6} {:.6}\n", n[0], n[1], n[2]));
        }
        for (i, face) in mesh.faces.iter().enumerate() {
            let [a, b, c] = face.vertices;
            let n = i + 1;
            out.push_str(&format!("f {}//{} {}//{} {}//{}\n", a + 1, n, b + 1, n, c + 1, n));
        }
    } else {
        for face in &mesh.faces {
            let [a, b, c] = face.vertices;
            out.push_str(&format!("f {} {} {}\n", a + 1, b + 1, c + 1));
        }
    }

    out
}

/// Unit normal of a face. STL writers often store a zero normal, in which case it is
/// recomputed from the winding.
fn face_normal(mesh: &IndexedMesh, face: &stl_io::IndexedTriangle) -> [f32; 3] {
    let stored = [face.normal[0], face.normal[1], face.normal[2]];
    if let Some(n) = normalize(stored) {
        return n;
    }

    let a = &mesh.vertices[face.vertices[0]];
    let b = &mesh.vertices[face.vertices[1]];
    let c = &mesh.vertices[face.vertices[2]];
    let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
    let cross = [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ];
    normalize(cross).unwrap_or([0.0, 0.0, 0.0])
}

fn normalize(v: [f32; 3]) -> Option<[f32; 3]> {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if !len.is_finite() || len <= f32::EPSILON {
        return None;
    }
    Some([v[0] / len, v[1] / len, v[2] / len])
}

#[cfg(test)]
mod tests {
    use super::*;
    use stl_io::{IndexedTriangle, Normal, Vertex};

    fn unit_triangle(normal: [f32; 3]) -> IndexedMesh {
        IndexedMesh {
            vertices: vec![
                Vertex::new([0.0, 0.0, 0.0]),
                Vertex::new([1.0, 0.0, 0.0]),
                Vertex::new([0.0, 1.0, 0.0]),
            ],
            faces: vec![IndexedTriangle {
                normal: Normal::new(normal),
                vertices: [0, 1, 2],
            }],
        }
    }

    #[test]
    fn test_encode_without_normals() {
        let obj = encode_obj(&unit_triangle([0.0, 0.0, 1.0]), "tri", &ObjOptions::default());
        let lines: Vec<&str> = obj.lines().filter(|l| !l.starts_with('#')).collect();

        assert_eq!(
            lines,
            vec![
                "o tri",
                "v 0.000000 0.000000 0.000000",
                "v 1.000000 0.000000 0.000000",
                "v 0.000000 1.000000 0.000000",
                "f 1 2 3",
            ]
        );
        assert!(!obj.contains("vn "));
    }

    #[test]
    fn test_encode_with_normals() {
        let options = ObjOptions {
            include_normals: true,
        };
        let obj = encode_obj(&unit_triangle([0.0, 0.0, 2.0]), "tri", &options);

        assert!(obj.contains("vn 0.000000 0.000000 1.000000\n"));
        assert!(obj.contains("f 1//1 2//1 3//1\n"));
    }

    #[test]
    fn test_zero_normal_is_recomputed() {
        let options = ObjOptions {
            include_normals: true,
        };
        let obj = encode_obj(&unit_triangle([0.0, 0.0, 0.0]), "tri", &options);

        // Counter-clockwise winding in the XY plane faces +Z.
        assert!(obj.contains("vn 0.000000 0.000000 1.000000\n"));
    }

    #[test]
    fn test_object_name_whitespace() {
        let obj = encode_obj(&unit_triangle([0.0, 0.0, 1.0]), "my part", &ObjOptions::default());
        assert!(obj.contains("o my_part\n"));

        let obj = encode_obj(&unit_triangle([0.0, 0.0, 1.0]), "  ", &ObjOptions::default());
        assert!(!obj.contains("\no "));
    }

    #[test]
    fn test_header_counts_and_line_endings() {
        let obj = encode_obj(&unit_triangle([0.0, 0.0, 1.0]), "tri", &ObjOptions::default());

        assert!(obj.starts_with("# Exported by meshport\n# vertices: 3 faces: 1\n"));
        assert!(obj.ends_with("f 1 2 3\n"));
        assert_eq!(obj.lines().count(), 7);
    }
}
