use crate::artifacts::diff::edit::EditRecord;
use crate::artifacts::diff::lcs::{DiffAlgorithm, LcsDiff};
use crate::artifacts::diff::positional::{PositionalTally, align_positional};
use crate::artifacts::lines::line::Sequence;
use clap::ValueEnum;
use std::fmt::Display;

/// Named definition of how "changed" is computed between two sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlignmentPolicy {
    /// Minimal edit alignment over a longest common subsequence
    #[default]
    Lcs,
    /// Index-synchronised comparison without re-synchronisation
    Positional,
}

impl AlignmentPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlignmentPolicy::Lcs => "lcs",
            AlignmentPolicy::Positional => "positional",
        }
    }

    pub fn align(&self, old: &Sequence, new: &Sequence) -> Alignment {
        match self {
            AlignmentPolicy::Lcs => {
                Alignment::Edits(LcsDiff::new(old.lines(), new.lines()).diff())
            }
            AlignmentPolicy::Positional => {
                Alignment::Positional(align_positional(old.lines(), new.lines()))
            }
        }
    }
}

impl Display for AlignmentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of aligning two sequences under one policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alignment {
    Edits(Vec<EditRecord>),
    Positional(PositionalTally),
}

impl Alignment {
    pub fn policy(&self) -> AlignmentPolicy {
        match self {
            Alignment::Edits(_) => AlignmentPolicy::Lcs,
            Alignment::Positional(_) => AlignmentPolicy::Positional,
        }
    }
}
