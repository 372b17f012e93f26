//! Line values and the sequences built from them
//!
//! - `line`: a single comparison unit and the ordered sequence that owns it
//! - `chunking`: the width-limiting transform applied before alignment

pub mod chunking;
pub mod line;

/// Widest line the alignment engine ever sees, in characters
pub const MAX_LINE_WIDTH: usize = 80;
