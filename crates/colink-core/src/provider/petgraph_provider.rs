use crate::error::Result;
use crate::matrix::AdjacencyMatrix;
use crate::provider::AdjacencyProvider;
use petgraph::graph::{Graph, IndexType};
use petgraph::visit::EdgeRef;
use petgraph::EdgeType;
use std::fmt::Display;
use std::marker::PhantomData;

/// Adjacency provider for `petgraph::Graph`.
///
/// Matrix order is node-index order and labels are the node weights'
/// `Display` output. Edge weights are ignored.
pub struct PetgraphProvider<N, E, Ty, Ix = petgraph::graph::DefaultIx> {
    _marker: PhantomData<fn() -> (N, E, Ty, Ix)>,
}

impl<N, E, Ty, Ix> PetgraphProvider<N, E, Ty, Ix> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<N, E, Ty, Ix> Default for PetgraphProvider<N, E, Ty, Ix> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E, Ty, Ix> AdjacencyProvider for PetgraphProvider<N, E, Ty, Ix>
where
    N: Display,
    Ty: EdgeType,
    Ix: IndexType,
{
    type Graph = Graph<N, E, Ty, Ix>;
    type Value = bool;

    fn adjacency_matrix(
        &self,
        graph: &Self::Graph,
        directed: bool,
    ) -> Result<AdjacencyMatrix<bool>> {
        let n = graph.node_count();
        // An undirected petgraph edge has no orientation, so it fills both cells.
        let symmetric = !directed || !graph.is_directed();

        let mut data = vec![false; n * n];
        for edge in graph.edge_references() {
            let (i, j) = (edge.source().index(), edge.target().index());
            data[i * n + j] = true;
            if symmetric {
                data[j * n + i] = true;
            }
        }

        let labels: Vec<String> = graph
            .node_indices()
            .map(|idx| graph[idx].to_string())
            .collect();
        AdjacencyMatrix::square(n, data)?.with_labels(labels)
    }
}
