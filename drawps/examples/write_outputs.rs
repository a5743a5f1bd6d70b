use std::io::{Write, stdout};

use drawps::{PathOp, PixelGrid, write_pbm, write_ps};

fn main() {
    env_logger::init();

    let mut out = stdout().lock();

    let mut grid = PixelGrid::new(8, 8);
    for i in 0..8 {
        grid.set(i, i, 1);
    }
    write_pbm(&grid, "diagonal.ps", &mut out).expect("write pbm");

    out.write_all(b"\n\n").expect("write separator");

    let ops = vec![
        PathOp::MoveTo { x: 144., y: 72. },
        PathOp::LineTo { x: 144., y: 432. },
        PathOp::LineTo { x: 72., y: 396. },
        PathOp::Stroke("stroke".into()),
    ];
    write_ps(&ops, &mut out).expect("write ps");
}
