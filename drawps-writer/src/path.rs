use std::io::{self, Write};

use crate::{PAGE_HEIGHT, PAGE_WIDTH};

/// One step of a vector path. `MoveTo`/`LineTo` carry upstream intent; the
/// emitted verb is decided by the writer's pen state, so the first
/// coordinate op after a stroke always becomes a `moveto`.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOp {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Stroke(String),
}

enum PenState {
    AwaitingMoveto,
    InPath,
}

/// Serializes path operations as a PostScript fragment: a
/// `%%BeginSetup`/`%%EndSetup` page-size block, then the body between
/// `%%%BEGIN` and `%%%END`. Coordinates are rounded half away from zero.
pub fn write_ps<W: Write>(ops: &[PathOp], out: &mut W) -> io::Result<()> {
    write!(
        out,
        "%%BeginSetup\n   << /PageSize [{PAGE_WIDTH} {PAGE_HEIGHT}] >> setpagedevice\n%%EndSetup\n\n%%%BEGIN"
    )?;

    let mut pen = PenState::AwaitingMoveto;
    for op in ops {
        match op {
            PathOp::MoveTo { x, y } | PathOp::LineTo { x, y } => {
                let verb = match pen {
                    PenState::AwaitingMoveto => "moveto",
                    PenState::InPath => "lineto",
                };
                write!(out, "\n{} {} {verb}", x.round() as i64, y.round() as i64)?;
                pen = PenState::InPath;
            }
            PathOp::Stroke(label) => {
                write!(out, "\n{label}")?;
                pen = PenState::AwaitingMoveto;
            }
        }
    }

    write!(out, "\n%%%END\n")
}

#[cfg(test)]
mod tests {
    use crate::path::{PathOp, write_ps};

    fn write_to_string(ops: &[PathOp]) -> String {
        let mut out = Vec::new();
        write_ps(ops, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn write_ps_test() {
        let ops = vec![
            PathOp::MoveTo { x: 1.4, y: 2.6 },
            PathOp::LineTo { x: 3., y: 3. },
            PathOp::Stroke("stroke".into()),
            PathOp::MoveTo { x: 5., y: 5. },
        ];
        assert_eq!(
            write_to_string(&ops),
            "%%BeginSetup\n   << /PageSize [501 501] >> setpagedevice\n%%EndSetup\n\n\
             %%%BEGIN\n1 3 moveto\n3 3 lineto\nstroke\n5 5 moveto\n%%%END\n"
        );
    }

    #[test]
    fn first_op_is_moveto_even_for_lineto_test() {
        let ops = vec![PathOp::LineTo { x: 0., y: 0. }];
        assert!(write_to_string(&ops).contains("\n0 0 moveto\n"));
    }

    #[test]
    fn stroke_resets_pen_test() {
        let ops = vec![
            PathOp::MoveTo { x: 0., y: 0. },
            PathOp::Stroke("stroke".into()),
            PathOp::LineTo { x: 2., y: 2. },
            PathOp::LineTo { x: 4., y: 4. },
        ];
        let output = write_to_string(&ops);
        assert!(output.contains("\nstroke\n2 2 moveto\n4 4 lineto\n"));
    }

    #[test]
    fn rounding_half_away_from_zero_test() {
        let ops = vec![
            PathOp::MoveTo { x: 0.5, y: -0.5 },
            PathOp::LineTo { x: 2.5, y: -2.5 },
        ];
        let output = write_to_string(&ops);
        assert!(output.contains("\n1 -1 moveto\n3 -3 lineto\n"));
    }

    #[test]
    fn empty_ops_test() {
        let output = write_to_string(&[]);
        assert!(output.ends_with("%%%BEGIN\n%%%END\n"));
    }
}
