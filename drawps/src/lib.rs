use std::{fs, path::Path};

mod error;

pub use error::*;

pub use drawps_mesh::{Face, MeshError, MeshErrorKind, MeshFaces, Vertex, parse_smf};
pub use drawps_parser::{
    BEGIN_MARKER, Command, CommandStream, END_MARKER, extract_block, parse_draw, split_tokens,
};
pub use drawps_writer::{
    PAGE_HEIGHT, PAGE_WIDTH, PathOp, PixelGrid, derive_pbm_name, write_pbm, write_ps,
};

/// Reads a draw-command file into its tokenized meaningful lines.
pub fn read_draw_file(path: impl AsRef<Path>) -> Result<CommandStream, DrawError> {
    let input = fs::read_to_string(path)?;
    Ok(parse_draw(&input))
}

/// Reads an SMF mesh file into its triangles.
pub fn read_smf_file(path: impl AsRef<Path>) -> Result<MeshFaces, DrawError> {
    let input = fs::read_to_string(path)?;
    Ok(parse_smf(&input)?)
}

#[cfg(test)]
mod tests {
    use crate::{DrawErrorKind, MeshErrorKind, read_draw_file, read_smf_file};

    #[test]
    fn read_draw_file_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("square.ps");
        std::fs::write(&path, "%%%BEGIN\n10 10 moveto\n10 20 lineto\nstroke\n%%%END\n").unwrap();

        let commands = read_draw_file(&path).unwrap();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[2].tokens(), ["stroke"]);
    }

    #[test]
    fn read_draw_file_missing_test() {
        let err = read_draw_file("no/such/file.ps").unwrap_err();
        assert!(matches!(err.kind(), DrawErrorKind::Io(_)));
    }

    #[test]
    fn read_smf_file_bad_face_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.smf");
        std::fs::write(&path, "v 0 0 0\nf 1 2 3\n").unwrap();

        let err = read_smf_file(&path).unwrap_err();
        match err.kind() {
            DrawErrorKind::Mesh(mesh) => {
                assert_eq!(mesh.kind, MeshErrorKind::FaceIndexOutOfRange)
            }
            other => panic!("expected mesh error, got {other:?}"),
        }
    }

    #[test]
    fn read_sample_files_test() {
        let commands = read_draw_file("examples/sample_draw.ps").unwrap();
        assert!(!commands.is_empty());

        let faces = read_smf_file("examples/cube.smf").unwrap();
        assert_eq!(faces.len(), 12);
        assert!(faces.iter().all(|f| f.0.iter().all(|v| v.w == 1.)));
    }
}
