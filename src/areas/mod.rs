//! Stateful collaborators of a comparison run
//!
//! - `source`: reads one side of the comparison into a line sequence
//! - `comparator`: owns both sources and the report writer

pub mod comparator;
pub mod source;
