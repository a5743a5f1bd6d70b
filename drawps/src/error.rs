use std::fmt::Display;

use drawps_mesh::MeshError;

#[derive(Debug)]
pub enum DrawErrorKind {
    Io(std::io::Error),
    Mesh(MeshError),
}

#[derive(Debug)]
pub struct DrawError {
    kind: DrawErrorKind,
}

impl DrawError {
    pub fn kind(&self) -> &DrawErrorKind {
        &self.kind
    }
}

impl From<std::io::Error> for DrawError {
    fn from(value: std::io::Error) -> Self {
        Self {
            kind: DrawErrorKind::Io(value),
        }
    }
}

impl From<MeshError> for DrawError {
    fn from(value: MeshError) -> Self {
        Self {
            kind: DrawErrorKind::Mesh(value),
        }
    }
}

impl Display for DrawError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            DrawErrorKind::Io(ref err) => write!(f, "I/O error: {err}"),
            DrawErrorKind::Mesh(ref err) => write!(f, "Mesh error: {err}"),
        }
    }
}

impl std::error::Error for DrawError {}
