use crate::error::{Axis, ColinkError, Result};
use crate::types::{LinkCount, NodeLabel};
use serde::{Deserialize, Serialize};

/// Shared two-hop link counts for every ordered node pair.
///
/// Entry (i, j) is the number of intermediaries k with an edge i→k and an
/// edge k→j. Same dimensions and labels as the adjacency matrix it was
/// computed from. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CommonLinkParts")]
pub struct CommonLinkMatrix {
    n: usize,
    counts: Vec<LinkCount>,
    row_labels: Option<Vec<NodeLabel>>,
    col_labels: Option<Vec<NodeLabel>>,
}

#[derive(Deserialize)]
struct CommonLinkParts {
    n: usize,
    counts: Vec<LinkCount>,
    row_labels: Option<Vec<NodeLabel>>,
    col_labels: Option<Vec<NodeLabel>>,
}

impl TryFrom<CommonLinkParts> for CommonLinkMatrix {
    type Error = ColinkError;

    fn try_from(parts: CommonLinkParts) -> Result<Self> {
        let expected = parts
            .n
            .checked_mul(parts.n)
            .ok_or(ColinkError::DimensionOverflow {
                rows: parts.n,
                cols: parts.n,
            })?;
        if parts.counts.len() != expected {
            return Err(ColinkError::DataLength {
                expected,
                found: parts.counts.len(),
            });
        }
        for (axis, labels) in [(Axis::Rows, &parts.row_labels), (Axis::Cols, &parts.col_labels)] {
            if let Some(labels) = labels {
                if labels.len() != parts.n {
                    return Err(ColinkError::LabelLength {
                        axis,
                        expected: parts.n,
                        found: labels.len(),
                    });
                }
            }
        }

        Ok(Self {
            n: parts.n,
            counts: parts.counts,
            row_labels: parts.row_labels,
            col_labels: parts.col_labels,
        })
    }
}

/// One off-diagonal cell of a common-link matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPair {
    pub row: usize,
    pub col: usize,
    pub row_label: Option<NodeLabel>,
    pub col_label: Option<NodeLabel>,
    pub count: LinkCount,
}

impl CommonLinkMatrix {
    /// Callers guarantee `counts.len() == n * n` and label lengths of n.
    pub(crate) fn from_parts(
        n: usize,
        counts: Vec<LinkCount>,
        row_labels: Option<Vec<NodeLabel>>,
        col_labels: Option<Vec<NodeLabel>>,
    ) -> Self {
        debug_assert_eq!(counts.len(), n * n);
        Self {
            n,
            counts,
            row_labels,
            col_labels,
        }
    }

    /// Number of nodes (rows == cols).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<LinkCount> {
        if row >= self.n || col >= self.n {
            return None;
        }
        Some(self.counts[row * self.n + col])
    }

    pub fn row(&self, row: usize) -> Option<&[LinkCount]> {
        if row >= self.n {
            return None;
        }
        let start = row * self.n;
        Some(&self.counts[start..start + self.n])
    }

    /// Look a cell up by its row and column labels.
    pub fn get_by_label(&self, row: &str, col: &str) -> Option<LinkCount> {
        let i = self.row_labels.as_ref()?.iter().position(|l| l == row)?;
        let j = self.col_labels.as_ref()?.iter().position(|l| l == col)?;
        self.get(i, j)
    }

    pub fn row_labels(&self) -> Option<&[NodeLabel]> {
        self.row_labels.as_deref()
    }

    pub fn col_labels(&self) -> Option<&[NodeLabel]> {
        self.col_labels.as_deref()
    }

    /// Row-major counts.
    pub fn as_slice(&self) -> &[LinkCount] {
        &self.counts
    }

    /// Nested rows, for callers that want `Vec<Vec<_>>`.
    pub fn to_rows(&self) -> Vec<Vec<LinkCount>> {
        if self.n == 0 {
            return Vec::new();
        }
        self.counts.chunks(self.n).map(<[LinkCount]>::to_vec).collect()
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.n;
        (0..n).all(|i| (i + 1..n).all(|j| self.counts[i * n + j] == self.counts[j * n + i]))
    }

    /// Sum of every cell: the total number of length-2 paths.
    pub fn total_links(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Strongest off-diagonal pairs, highest count first.
    ///
    /// Ties are broken by (row, col) ascending. Zero cells are skipped.
    pub fn top_pairs(&self, limit: usize) -> Vec<LinkPair> {
        let n = self.n;
        let mut cells: Vec<(usize, usize, LinkCount)> = self
            .counts
            .iter()
            .enumerate()
            .filter_map(|(idx, &count)| {
                let (i, j) = (idx / n, idx % n);
                (i != j && count > 0).then_some((i, j, count))
            })
            .collect();

        cells.sort_by(|a, b| b.2.cmp(&a.2).then((a.0, a.1).cmp(&(b.0, b.1))));
        cells.truncate(limit);

        cells
            .into_iter()
            .map(|(row, col, count)| LinkPair {
                row,
                col,
                row_label: self.row_labels.as_ref().map(|l| l[row].clone()),
                col_label: self.col_labels.as_ref().map(|l| l[col].clone()),
                count,
            })
            .collect()
    }
}
