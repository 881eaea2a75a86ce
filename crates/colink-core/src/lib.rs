//! Common-link matrices for labeled graphs.
//!
//! For an adjacency matrix A, the common-link matrix C has
//! `C[i][j] = |{ k : A[i][k] && A[k][j] }|`: the number of intermediaries
//! joining i to j in two hops. Edge weights are read as presence only.
//!
//! # Example
//! ```rust
//! use colink_core::{compute, AdjacencyMatrix};
//!
//! let adj = AdjacencyMatrix::from_rows(vec![vec![0, 1], vec![1, 0]])
//!     .unwrap()
//!     .with_labels(["a", "b"])
//!     .unwrap();
//! let links = compute(&adj).unwrap();
//! assert_eq!(links.get_by_label("a", "a"), Some(1));
//! assert_eq!(links.get_by_label("a", "b"), Some(0));
//! ```

pub mod types;
pub mod error;
pub mod matrix;
pub mod provider;
pub mod links;

pub use error::{Axis, ColinkError, Result};
pub use types::*;
pub use matrix::{AdjacencyMatrix, CommonLinkMatrix, LinkPair};
pub use provider::{AdjacencyProvider, EdgeListGraph, EdgeListProvider};
#[cfg(feature = "petgraph")]
pub use provider::PetgraphProvider;
pub use links::{
    compute, compute_from_graph, compute_with_config, CommonLinkConfig, CommonLinkEngine,
    GraphToCommonLink,
};
