//! Naming rules for conversion sources and their exports.

const STL_SUFFIX: &[u8] = b".stl";
const OBJ_EXTENSION: &str = ".obj";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilenameError {
    #[error("Filename is missing")]
    Missing,

    #[error("Not an STL filename: {0}")]
    NotStl(String),
}

/// Return the part of `filename` before a trailing, case-insensitive `.stl`.
pub fn stl_stem(filename: &str) -> Result<&str, FilenameError> {
    if filename.is_empty() {
        return Err(FilenameError::Missing);
    }

    let bytes = filename.as_bytes();
    if bytes.len() < STL_SUFFIX.len()
        || !bytes[bytes.len() - STL_SUFFIX.len()..].eq_ignore_ascii_case(STL_SUFFIX)
    {
        return Err(FilenameError::NotStl(filename.to_string()));
    }

    // The suffix is ASCII, so the cut lands on a char boundary.
    Ok(&filename[..filename.len() - STL_SUFFIX.len()])
}

/// Derive the export filename: strip the trailing `.stl` and append `.obj`.
///
/// Only the suffix is touched; `part.stl.v2.stl` becomes `part.stl.v2.obj`.
pub fn export_name_for(filename: &str) -> Result<String, FilenameError> {
    let stem = stl_stem(filename)?;
    Ok(format!("{}{}", stem, OBJ_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_name_replaces_suffix() {
        assert_eq!(export_name_for("cube.stl").unwrap(), "cube.obj");
        assert_eq!(export_name_for("Cube.STL").unwrap(), "Cube.obj");
        assert_eq!(export_name_for("bracket.StL").unwrap(), "bracket.obj");
    }

    #[test]
    fn test_embedded_stl_is_preserved() {
        assert_eq!(
            export_name_for("part.stl.v2.stl").unwrap(),
            "part.stl.v2.obj"
        );
        assert_eq!(export_name_for("my.stlfile.stl").unwrap(), "my.stlfile.obj");
    }

    #[test]
    fn test_wrong_suffix_rejected() {
        for name in ["cube.obj", "cube.stl.bak", "stl", "cube_stl", "cube.st"] {
            assert_eq!(
                export_name_for(name),
                Err(FilenameError::NotStl(name.to_string()))
            );
        }
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(export_name_for(""), Err(FilenameError::Missing));
    }

    #[test]
    fn test_non_ascii_names() {
        assert_eq!(export_name_for("zahnrad_ü.stl").unwrap(), "zahnrad_ü.obj");
        assert!(matches!(stl_stem("ü"), Err(FilenameError::NotStl(_))));
        assert!(matches!(stl_stem("日本.obj"), Err(FilenameError::NotStl(_))));
    }
}
