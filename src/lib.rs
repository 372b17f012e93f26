//! Line-level comparison of two versions of a text source
//!
//! Data flows one way: a `Source` is loaded into a width-limited `Sequence`,
//! an `AlignmentPolicy` aligns the two sequences, and a `Report` tallies and
//! renders the result.
//!
//! - `areas`: sources on disk and the comparator that owns the output
//! - `artifacts`: lines, alignment algorithms and reporting
//! - `commands`: the compare operation
//! - `errors`: load failures

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use artifacts::diff::policy::{Alignment, AlignmentPolicy};
