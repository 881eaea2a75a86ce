use crate::error::Result;
use crate::matrix::AdjacencyMatrix;
use crate::types::Truthy;

/// Builds adjacency matrices from some graph representation.
///
/// Implementations return a square matrix whose entries are truthy iff an
/// edge exists between the corresponding nodes. With `directed == false`
/// edge direction is collapsed, so the matrix is symmetric. Row and column
/// labels are the graph's node identifiers in a stable order.
pub trait AdjacencyProvider: Send + Sync {
    /// Graph representation this provider reads.
    type Graph: ?Sized;

    /// Entry type of the produced matrix.
    type Value: Truthy;

    fn adjacency_matrix(
        &self,
        graph: &Self::Graph,
        directed: bool,
    ) -> Result<AdjacencyMatrix<Self::Value>>;
}

impl<P: AdjacencyProvider + ?Sized> AdjacencyProvider for &P {
    type Graph = P::Graph;
    type Value = P::Value;

    fn adjacency_matrix(
        &self,
        graph: &Self::Graph,
        directed: bool,
    ) -> Result<AdjacencyMatrix<Self::Value>> {
        (**self).adjacency_matrix(graph, directed)
    }
}
