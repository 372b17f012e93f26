//! Counting and rendering of alignment results
//!
//! - `tally`: pure folds from edit records to counters
//! - `summary`: the fixed-format textual report

pub mod summary;
pub mod tally;
