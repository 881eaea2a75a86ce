use crate::error::{Axis, ColinkError, Result};
use crate::types::{NodeLabel, Truthy};
use serde::{Deserialize, Serialize};

/// Dense row-major matrix of edge indicators with optional node labels.
///
/// Entry (i, k) is read through [`Truthy`]: truthy means an edge i→k.
/// The matrix may be non-square; the common-link computation is what
/// rejects that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AdjacencyParts<T>")]
pub struct AdjacencyMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
    row_labels: Option<Vec<NodeLabel>>,
    col_labels: Option<Vec<NodeLabel>>,
}

/// Unchecked wire form, validated on deserialize.
#[derive(Deserialize)]
struct AdjacencyParts<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
    row_labels: Option<Vec<NodeLabel>>,
    col_labels: Option<Vec<NodeLabel>>,
}

impl<T> TryFrom<AdjacencyParts<T>> for AdjacencyMatrix<T> {
    type Error = ColinkError;

    fn try_from(parts: AdjacencyParts<T>) -> Result<Self> {
        let mut matrix = Self::new(parts.rows, parts.cols, parts.data)?;
        if let Some(labels) = parts.row_labels {
            matrix = matrix.with_row_labels(labels)?;
        }
        if let Some(labels) = parts.col_labels {
            matrix = matrix.with_col_labels(labels)?;
        }
        Ok(matrix)
    }
}

impl<T> AdjacencyMatrix<T> {
    /// Create an unlabeled matrix from row-major data.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(ColinkError::DimensionOverflow { rows, cols })?;
        if data.len() != expected {
            return Err(ColinkError::DataLength {
                expected,
                found: data.len(),
            });
        }

        Ok(Self {
            rows,
            cols,
            data,
            row_labels: None,
            col_labels: None,
        })
    }

    /// Create an unlabeled n×n matrix from row-major data.
    pub fn square(n: usize, data: Vec<T>) -> Result<Self> {
        Self::new(n, n, data)
    }

    /// Create a matrix from nested rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);

        let mut data = Vec::with_capacity(n_rows.saturating_mul(n_cols));
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(ColinkError::RaggedRows {
                    row: i,
                    expected: n_cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }

        Self::new(n_rows, n_cols, data)
    }

    /// Label rows and columns with the same node sequence.
    pub fn with_labels<I, S>(self, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeLabel>,
    {
        let labels: Vec<NodeLabel> = labels.into_iter().map(Into::into).collect();
        self.with_row_labels(labels.clone())?.with_col_labels(labels)
    }

    /// Set the row labels. Length must equal the row count.
    pub fn with_row_labels<I, S>(mut self, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeLabel>,
    {
        let labels: Vec<NodeLabel> = labels.into_iter().map(Into::into).collect();
        check_label_len(Axis::Rows, self.rows, &labels)?;
        self.row_labels = Some(labels);
        Ok(self)
    }

    /// Set the column labels. Length must equal the column count.
    pub fn with_col_labels<I, S>(mut self, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeLabel>,
    {
        let labels: Vec<NodeLabel> = labels.into_iter().map(Into::into).collect();
        check_label_len(Axis::Cols, self.cols, &labels)?;
        self.col_labels = Some(labels);
        Ok(self)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at (row, col), or None when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col)
    }

    /// Row slice, or None when out of bounds.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.data[start..start + self.cols])
    }

    /// Row-major backing data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn row_labels(&self) -> Option<&[NodeLabel]> {
        self.row_labels.as_deref()
    }

    pub fn col_labels(&self) -> Option<&[NodeLabel]> {
        self.col_labels.as_deref()
    }

    /// Position of a row label, if rows are labeled.
    pub fn index_of_row(&self, label: &str) -> Option<usize> {
        self.row_labels.as_ref()?.iter().position(|l| l == label)
    }

    /// Position of a column label, if columns are labeled.
    pub fn index_of_col(&self, label: &str) -> Option<usize> {
        self.col_labels.as_ref()?.iter().position(|l| l == label)
    }

    pub(crate) fn labels(&self) -> (Option<Vec<NodeLabel>>, Option<Vec<NodeLabel>>) {
        (self.row_labels.clone(), self.col_labels.clone())
    }
}

impl<T: Truthy> AdjacencyMatrix<T> {
    /// Read every entry as a boolean, failing on the first entry that
    /// has no boolean reading.
    pub fn to_bool(&self) -> Result<Vec<bool>> {
        self.data
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                value.truthiness().ok_or(ColinkError::NotTruthy {
                    row: idx / self.cols,
                    col: idx % self.cols,
                })
            })
            .collect()
    }

    /// True when entry (i, j) and entry (j, i) agree for every pair.
    pub fn is_symmetric(&self) -> Result<bool> {
        if !self.is_square() {
            return Ok(false);
        }
        let cells = self.to_bool()?;
        let n = self.rows;
        Ok((0..n).all(|i| (i + 1..n).all(|j| cells[i * n + j] == cells[j * n + i])))
    }
}

fn check_label_len(axis: Axis, expected: usize, labels: &[NodeLabel]) -> Result<()> {
    if labels.len() != expected {
        return Err(ColinkError::LabelLength {
            axis,
            expected,
            found: labels.len(),
        });
    }
    Ok(())
}
