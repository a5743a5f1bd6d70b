use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::{i64 as parse_i64, space1},
    number::complete::double as parse_double,
};

use crate::error::{MeshError, MeshErrorKind};

/// Homogeneous coordinate. The file only carries the three spatial
/// components; the unit `w` is appended on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Vertex {
    pub fn homogeneous(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, w: 1.0 }
    }
}

/// A triangle, vertices in the order the `f` record listed them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face(pub [Vertex; 3]);

pub type MeshFaces = Vec<Face>;

fn vertex_record(input: &str) -> IResult<&str, Vertex> {
    let (input, (_, _, x, _, y, _, z)) = (
        tag("v"),
        space1,
        parse_double,
        space1,
        parse_double,
        space1,
        parse_double,
    )
        .parse(input)?;
    Ok((input, Vertex::homogeneous(x, y, z)))
}

fn face_record(input: &str) -> IResult<&str, (i64, i64, i64)> {
    let (input, (_, _, a, _, b, _, c)) = (
        tag("f"),
        space1,
        parse_i64,
        space1,
        parse_i64,
        space1,
        parse_i64,
    )
        .parse(input)?;
    Ok((input, (a, b, c)))
}

fn resolve(vertices: &[Vertex], index: i64) -> Result<Vertex, MeshError> {
    if index < 1 || index as usize > vertices.len() {
        return Err(MeshError {
            kind: MeshErrorKind::FaceIndexOutOfRange,
            message: format!("index {index} with {} vertices declared", vertices.len()),
        });
    }
    Ok(vertices[index as usize - 1])
}

/// Parses an SMF mesh into its triangles, in declaration order. `f` indices
/// are 1-based and may only reference `v` records that appeared earlier in
/// the file. Records with an unrecognized tag are skipped.
pub fn parse_smf(input: &str) -> Result<MeshFaces, MeshError> {
    let mut vertices: Vec<Vertex> = Vec::new();
    let mut faces = Vec::new();

    for line in input.lines() {
        let line = line.trim_end();
        match line.split(' ').next() {
            Some("v") => {
                let (_, vertex) = vertex_record(line)?;
                vertices.push(vertex);
            }
            Some("f") => {
                let (_, (a, b, c)) = face_record(line)?;
                faces.push(Face([
                    resolve(&vertices, a)?,
                    resolve(&vertices, b)?,
                    resolve(&vertices, c)?,
                ]));
            }
            _ => log::debug!("skipping record: {line}"),
        }
    }

    Ok(faces)
}
