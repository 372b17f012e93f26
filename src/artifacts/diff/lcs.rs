//! Minimal edit alignment
//!
//! A longest common subsequence of both inputs decides which lines are
//! unchanged; every other old line is removed and every other new line is
//! added. The table `lcs[i][j]` holds the LCS length of `a[i..]` and `b[j..]`
//! and is walked forward from the first lines of both inputs.
//!
//! ## Tie-breaking
//!
//! When skipping the current new line loses nothing, the new line is skipped
//! first. The current old line therefore stays available and the earliest
//! possible old line is anchored, the same choice `difflib` makes.
//! Between two anchors, removed lines are emitted before added lines.
//!
//! Time and space are O(n·m).

use crate::artifacts::diff::edit::EditRecord;
use derive_new::new;

pub trait DiffAlgorithm<'d, T> {
    type Table;
    type Anchors;
    type EditScript;

    fn compute_table(&self) -> Self::Table;
    fn anchors(&self) -> Self::Anchors;
    fn diff(&self) -> Self::EditScript;
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LcsDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Clone> DiffAlgorithm<'d, T> for LcsDiff<'d, T> {
    type Table = Vec<Vec<usize>>;
    /// Matched `(old index, new index)` pairs in increasing order
    type Anchors = Vec<(usize, usize)>;
    type EditScript = Vec<EditRecord<T>>;

    fn compute_table(&self) -> Self::Table {
        let (n, m) = (self.a.len(), self.b.len());
        let mut lcs = vec![vec![0; m + 1]; n + 1];

        for i in (0..n).rev() {
            for j in (0..m).rev() {
                lcs[i][j] = if self.a[i] == self.b[j] {
                    lcs[i + 1][j + 1] + 1
                } else {
                    lcs[i + 1][j].max(lcs[i][j + 1])
                };
            }
        }

        lcs
    }

    fn anchors(&self) -> Self::Anchors {
        let (n, m) = (self.a.len(), self.b.len());
        let lcs = self.compute_table();
        let mut anchors = Vec::with_capacity(lcs[0][0]);

        let (mut i, mut j) = (0, 0);
        while i < n && j < m {
            if self.a[i] == self.b[j] {
                anchors.push((i, j));
                i += 1;
                j += 1;
            } else if lcs[i][j + 1] >= lcs[i + 1][j] {
                // b[j] is not needed to keep a[i] reachable
                j += 1;
            } else {
                i += 1;
            }
        }

        anchors
    }

    fn diff(&self) -> Self::EditScript {
        let (n, m) = (self.a.len(), self.b.len());
        let mut diff = Vec::with_capacity(n + m);
        let (mut i, mut j) = (0, 0);

        // trailing sentinel flushes whatever follows the last anchor
        for (x, y) in self.anchors().into_iter().chain([(n, m)]) {
            diff.extend(self.a[i..x].iter().map(|line| EditRecord::Removed {
                line: line.clone(),
            }));
            diff.extend(self.b[j..y].iter().map(|line| EditRecord::Added {
                line: line.clone(),
            }));

            if let Some(line) = self.a.get(x).filter(|_| y < m) {
                diff.push(EditRecord::Unchanged { line: line.clone() });
            }

            (i, j) = (x + 1, y + 1);
        }

        diff
    }
}
