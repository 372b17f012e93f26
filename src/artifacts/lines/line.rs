//! A single line of text and the ordered sequence it belongs to
//!
//! Lines compare by content only; their position is carried for reporting
//! and never takes part in equality. Trailing whitespace is insignificant,
//! so `"foo  "` and `"foo"` are the same line.

use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, Eq, new)]
pub struct Line {
    /// Zero-based position within the owning sequence
    position: usize,
    /// Line content without its terminator
    text: String,
}

impl Line {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Content with both leading and trailing whitespace removed
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.text.trim_end() == other.text.trim_end()
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<Line> for String {
    fn from(line: Line) -> Self {
        line.text
    }
}

/// Ordered, read-only list of lines read from one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    name: String,
    lines: Vec<Line>,
}

impl Sequence {
    /// Build a sequence from raw texts, numbering them in order
    pub fn from_texts<I, S>(name: impl Into<String>, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = texts
            .into_iter()
            .enumerate()
            .map(|(position, text)| Line::new(position, text.into()))
            .collect();

        Sequence {
            name: name.into(),
            lines,
        }
    }

    /// Label of the source this sequence was read from
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(Line::text)
    }
}
