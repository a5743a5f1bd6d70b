use std::io::{self, Write};

use crate::{PAGE_HEIGHT, PAGE_WIDTH};

/// Values per output line in the pixel stream. The counter runs across the
/// whole stream, it does not reset at row boundaries.
const WRAP: usize = 69;

/// A grid of pixel values, row 0 first in storage order. Values are passed
/// through to the output as-is; the writer does not check them against the
/// 0/1 the PBM format expects.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    rows: Vec<Vec<u8>>,
}

impl PixelGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![0; width]; height],
        }
    }

    /// A zeroed grid at the 501x501 page convention.
    pub fn page() -> Self {
        Self::new(PAGE_WIDTH, PAGE_HEIGHT)
    }

    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        Self {
            width,
            height,
            rows,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        if let Some(px) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *px = value;
        }
    }
}

/// `<hint minus trailing extension>.pbm`. A hint without an extension keeps
/// its full text as the stem.
pub fn derive_pbm_name(hint: &str) -> String {
    let stem = match hint.rfind('.') {
        Some(dot) => &hint[..dot],
        None => hint,
    };
    format!("{stem}.pbm")
}

/// Serializes the grid as ASCII PBM. Rows are emitted in reverse of their
/// stored order (callers keep the origin at the bottom-left, raster order
/// is top-down); the reversal is a borrowed iteration, the grid itself is
/// left untouched.
pub fn write_pbm<W: Write>(grid: &PixelGrid, name_hint: &str, out: &mut W) -> io::Result<()> {
    write!(
        out,
        "P1\n# {}\n{} {}\n",
        derive_pbm_name(name_hint),
        grid.width(),
        grid.height()
    )?;

    let mut column = 0;
    for row in grid.rows().iter().rev() {
        for px in row {
            write!(out, "{px}")?;
            column += 1;
            if column == WRAP {
                out.write_all(b"\n")?;
                column = 0;
            } else {
                out.write_all(b" ")?;
            }
        }
    }

    log::debug!("wrote {}x{} pbm for {name_hint}", grid.width(), grid.height());
    Ok(())
}
