mod error;
mod smf;

pub use error::*;
pub use smf::{Face, MeshFaces, Vertex, parse_smf};
