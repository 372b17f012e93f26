//! Fixed-format change report
//!
//! ## Layout
//!
//! ```text
//! Comparing <old> -> <new> (policy: <policy>)
//! <annotated changed lines, minimal edit policy only>
//!
//! --- Change report ---
//! unchanged: <n>
//! added: <n>
//! removed: <n>
//! modified: <n>            (positional policy only)
//! ---------------------
//! ```

use crate::artifacts::diff::edit::EditRecord;
use crate::artifacts::diff::policy::{Alignment, AlignmentPolicy};
use crate::artifacts::report::tally::Tally;
use colored::Colorize;
use std::io::Write;

const BANNER: &str = "--- Change report ---";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    old_name: String,
    new_name: String,
    policy: AlignmentPolicy,
    changes: Vec<EditRecord>,
    tally: Tally,
    modified: Option<usize>,
}

impl Report {
    pub fn summarize(alignment: &Alignment, old_name: &str, new_name: &str) -> Self {
        let (changes, tally, modified) = match alignment {
            Alignment::Edits(edits) => (
                edits
                    .iter()
                    .filter(|edit| edit.is_change())
                    .cloned()
                    .collect(),
                Tally::from_edits(edits),
                None,
            ),
            Alignment::Positional(positional) => {
                (Vec::new(), positional.tally, Some(positional.modified))
            }
        };

        Report {
            old_name: old_name.to_string(),
            new_name: new_name.to_string(),
            policy: alignment.policy(),
            changes,
            tally,
            modified,
        }
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn modified(&self) -> Option<usize> {
        self.modified
    }

    pub fn changes(&self) -> &[EditRecord] {
        &self.changes
    }

    pub fn render(&self, writer: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(
            writer,
            "{}",
            format!(
                "Comparing {} -> {} (policy: {})",
                self.old_name, self.new_name, self.policy
            )
            .bold()
        )?;

        for annotation in self.changes.iter().filter_map(EditRecord::colored_annotation) {
            writeln!(writer, "{annotation}")?;
        }

        writeln!(writer)?;
        writeln!(writer, "{BANNER}")?;
        writeln!(writer, "unchanged: {}", self.tally.unchanged)?;
        writeln!(writer, "added: {}", self.tally.added)?;
        writeln!(writer, "removed: {}", self.tally.removed)?;
        if let Some(modified) = self.modified {
            writeln!(writer, "modified: {modified}")?;
        }
        writeln!(writer, "{}", "-".repeat(BANNER.len()))?;

        Ok(())
    }
}
