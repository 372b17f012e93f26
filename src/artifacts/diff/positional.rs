//! Positional alignment
//!
//! Walks both sequences by index without ever re-synchronising after a
//! mismatch. Lines compare with leading and trailing whitespace ignored.
//!
//! Two passes run independently:
//!
//! 1. A classifying walk: equal lines advance both cursors, otherwise the
//!    current new line counts as added while any new lines remain, and only
//!    once the new side is exhausted are the leftover old lines removed.
//! 2. A lockstep walk over the shared prefix length counting every index
//!    whose lines differ as modified.
//!
//! The modified count is not reconciled with the added/removed counts.

use crate::artifacts::lines::line::Line;
use crate::artifacts::report::tally::Tally;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionalTally {
    pub tally: Tally,
    pub modified: usize,
}

pub fn align_positional(old: &[Line], new: &[Line]) -> PositionalTally {
    PositionalTally {
        tally: classify(old, new),
        modified: count_modified(old, new),
    }
}

fn same(a: &Line, b: &Line) -> bool {
    a.trimmed() == b.trimmed()
}

fn classify(old: &[Line], new: &[Line]) -> Tally {
    let mut tally = Tally::default();
    let (mut i, mut j) = (0, 0);

    while i < old.len() || j < new.len() {
        match (old.get(i), new.get(j)) {
            (Some(a), Some(b)) if same(a, b) => {
                tally.unchanged += 1;
                i += 1;
                j += 1;
            }
            (_, Some(_)) => {
                tally.added += 1;
                j += 1;
            }
            (Some(_), None) => {
                tally.removed += 1;
                i += 1;
            }
            (None, None) => break,
        }
    }

    tally
}

fn count_modified(old: &[Line], new: &[Line]) -> usize {
    old.iter().zip(new).filter(|(a, b)| !same(a, b)).count()
}
