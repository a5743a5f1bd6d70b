mod commands;
mod parse;

pub use commands::*;
pub use parse::{extract_block, parse_draw, split_tokens};
