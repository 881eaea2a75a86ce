use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColinkError>;

/// Matrix axis, used to report label mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Cols,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Rows => write!(f, "row"),
            Axis::Cols => write!(f, "column"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ColinkError {
    #[error("Shape error: adjacency matrix must be square, got {rows}x{cols}")]
    Shape { rows: usize, cols: usize },

    #[error("Shape error: row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Shape error: matrix data has {found} entries, expected {expected}")]
    DataLength { expected: usize, found: usize },

    #[error("Shape error: {rows}x{cols} cells overflow usize")]
    DimensionOverflow { rows: usize, cols: usize },

    #[error("Type error: entry ({row}, {col}) cannot be read as edge present/absent")]
    NotTruthy { row: usize, col: usize },

    #[error("Label error: {expected} {axis} labels required, got {found}")]
    LabelLength {
        axis: Axis,
        expected: usize,
        found: usize,
    },

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Duplicate node: {0}")]
    DuplicateNode(String),

    #[error("Matrix too large: {nodes} nodes exceeds limit of {max}")]
    TooLarge { nodes: usize, max: usize },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Adjacency provider error: {0}")]
    Provider(String),
}

impl ColinkError {
    /// True for the shape family (non-square or malformed dimensions).
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            ColinkError::Shape { .. }
                | ColinkError::RaggedRows { .. }
                | ColinkError::DataLength { .. }
                | ColinkError::DimensionOverflow { .. }
        )
    }
}
