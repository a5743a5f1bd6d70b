use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub enum MeshErrorKind {
    InvalidRecord,
    FaceIndexOutOfRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeshError {
    pub kind: MeshErrorKind,
    pub message: String,
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MeshErrorKind::InvalidRecord => write!(f, "Invalid record: {}...", self.message),
            MeshErrorKind::FaceIndexOutOfRange => {
                write!(f, "Face index out of range: {}", self.message)
            }
        }
    }
}

impl std::error::Error for MeshError {}

impl<T: Display> From<nom::Err<nom::error::Error<T>>> for MeshError {
    fn from(value: nom::Err<nom::error::Error<T>>) -> Self {
        let message = match value {
            nom::Err::Incomplete(_) => "truncated record".to_string(),
            nom::Err::Error(err) | nom::Err::Failure(err) => {
                let input = err.input.to_string();
                input.chars().take(20).collect()
            }
        };
        MeshError {
            kind: MeshErrorKind::InvalidRecord,
            message,
        }
    }
}
