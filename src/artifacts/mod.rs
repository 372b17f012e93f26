//! Comparison data structures and algorithms
//!
//! - `lines`: line values, sequences and the chunking transform
//! - `diff`: minimal edit and positional alignment
//! - `report`: tallies and the rendered change report

pub mod diff;
pub mod lines;
pub mod report;
