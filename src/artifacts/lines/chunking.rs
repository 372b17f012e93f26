//! Width-limiting transform
//!
//! Any line wider than the limit is cut into consecutive pieces of at most
//! `width` characters. Every piece becomes an independent comparison unit,
//! so a long line that changes in one place shows up as a changed chunk
//! rather than a changed line. Positions are renumbered after splitting.

use crate::artifacts::lines::line::{Line, Sequence};

/// Split every overlong line of `sequence` into chunks of at most `width` characters
pub fn chunk_lines(sequence: Sequence, width: usize) -> Sequence {
    let name = sequence.name().to_string();
    let texts = sequence
        .lines()
        .iter()
        .flat_map(|line| split_line(line, width))
        .collect::<Vec<_>>();

    Sequence::from_texts(name, texts)
}

fn split_line(line: &Line, width: usize) -> Vec<String> {
    if width == 0 || line.len() <= width {
        return vec![line.text().to_string()];
    }

    let chars = line.text().chars().collect::<Vec<_>>();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
