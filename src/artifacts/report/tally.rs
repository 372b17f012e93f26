use crate::artifacts::diff::edit::EditRecord;

/// Per-classification line counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
}

impl Tally {
    pub fn from_edits<T>(edits: &[EditRecord<T>]) -> Self {
        edits.iter().fold(Tally::default(), |tally, edit| tally.record(edit))
    }

    fn record<T>(self, edit: &EditRecord<T>) -> Self {
        match edit {
            EditRecord::Unchanged { .. } => Tally {
                unchanged: self.unchanged + 1,
                ..self
            },
            EditRecord::Added { .. } => Tally {
                added: self.added + 1,
                ..self
            },
            EditRecord::Removed { .. } => Tally {
                removed: self.removed + 1,
                ..self
            },
        }
    }

    /// Same counts seen from the other direction
    pub fn swapped(self) -> Self {
        Tally {
            unchanged: self.unchanged,
            added: self.removed,
            removed: self.added,
        }
    }
}
