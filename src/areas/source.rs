use crate::artifacts::lines::MAX_LINE_WIDTH;
use crate::artifacts::lines::chunking::chunk_lines;
use crate::artifacts::lines::line::Sequence;
use crate::errors::LoadError;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// One side of a comparison, backed by a file on disk
#[derive(Debug)]
pub struct Source {
    path: Box<Path>,
}

impl Source {
    pub fn new(path: Box<Path>) -> Self {
        Source { path }
    }

    pub fn name(&self) -> String {
        self.path.display().to_string()
    }

    pub fn load(&self) -> Result<Sequence, LoadError> {
        let file = File::open(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => LoadError::SourceNotFound {
                path: self.path.to_path_buf(),
            },
            _ => LoadError::Io {
                name: self.name(),
                source,
            },
        })?;

        read_sequence(&self.name(), file)
    }
}

/// Read a whole text stream into a width-limited line sequence
///
/// Trailing whitespace is stripped from every line before it is chunked.
pub fn read_sequence(name: &str, mut reader: impl Read) -> Result<Sequence, LoadError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| LoadError::Io {
            name: name.to_string(),
            source,
        })?;

    let text = String::from_utf8(bytes).map_err(|source| LoadError::EncodingError {
        name: name.to_string(),
        source,
    })?;

    // trailing whitespace goes before chunking so it never forms a chunk of its own
    let raw = Sequence::from_texts(
        name,
        split_lines(&text).iter().map(|line| line.trim_end()),
    );
    let sequence = chunk_lines(raw, MAX_LINE_WIDTH);

    tracing::debug!(
        source = name,
        lines = sequence.len(),
        "loaded source into line sequence"
    );

    Ok(sequence)
}

/// Split text into lines, accepting `\n`, `\r\n` and lone `\r` terminators
///
/// A terminator at the very end does not start an extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(String::from)
        .collect()
}
