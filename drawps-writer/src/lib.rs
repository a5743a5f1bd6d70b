mod path;
mod pbm;

pub use path::{PathOp, write_ps};
pub use pbm::{PixelGrid, derive_pbm_name, write_pbm};

/// Page convention shared by the raster and the vector output.
pub const PAGE_WIDTH: usize = 501;
pub const PAGE_HEIGHT: usize = 501;
