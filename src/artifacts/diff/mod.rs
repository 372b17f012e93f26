//! Line alignment
//!
//! Two independent definitions of "what changed" live here and are never
//! reconciled with each other:
//!
//! - `lcs`: minimal edit alignment over a longest common subsequence producing
//!   ordered `EditRecord`s
//! - `positional`: index-synchronised walk producing counts only
//! - `policy`: the caller-facing switch between the two
//! - `edit`: the classified output of the minimal edit alignment

pub mod edit;
pub mod lcs;
pub mod policy;
pub mod positional;
