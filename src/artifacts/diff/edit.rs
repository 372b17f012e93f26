use crate::artifacts::lines::line::Line;
use colored::{ColoredString, Colorize};
use std::fmt::Display;

const ADDED_MARKER: &str = "# NEW LINE";
const REMOVED_MARKER: &str = "# DELETED LINE";

/// One classified line of a minimal edit alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditRecord<T = Line> {
    Unchanged { line: T },
    Added { line: T },
    Removed { line: T },
}

impl<T> EditRecord<T> {
    pub fn line(&self) -> &T {
        match self {
            EditRecord::Unchanged { line }
            | EditRecord::Added { line }
            | EditRecord::Removed { line } => line,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, EditRecord::Unchanged { .. })
    }
}

impl<T> EditRecord<T>
where
    T: Clone + Into<String>,
{
    /// Plain-text annotation; unchanged lines have none
    pub fn annotation(&self) -> Option<String> {
        match self {
            EditRecord::Unchanged { .. } => None,
            EditRecord::Added { line } => {
                Some(format!("{}  {}", line.clone().into(), ADDED_MARKER))
            }
            EditRecord::Removed { line } => {
                Some(format!("{}  {}", line.clone().into(), REMOVED_MARKER))
            }
        }
    }

    pub fn colored_annotation(&self) -> Option<ColoredString> {
        let annotation = self.annotation()?;
        match self {
            EditRecord::Added { .. } => Some(annotation.green()),
            EditRecord::Removed { .. } => Some(annotation.red()),
            EditRecord::Unchanged { .. } => None,
        }
    }
}

impl<T> Display for EditRecord<T>
where
    T: Clone + Into<String>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditRecord::Unchanged { line } => write!(f, " {}", line.clone().into()),
            EditRecord::Added { line } => write!(f, "+{}", line.clone().into()),
            EditRecord::Removed { line } => write!(f, "-{}", line.clone().into()),
        }
    }
}
