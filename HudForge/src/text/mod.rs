//! Line-level text helpers for HUD `.res` files
//!
//! - Comment toggling with `//` markers
//! - Line search that tolerates tab-separated keys

mod comment;
mod search;

pub use comment::{COMMENT_MARKER, comment_line, uncomment_line};
pub use search::find_lines;
