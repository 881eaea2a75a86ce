use crate::error::{ColinkError, Result};
use crate::matrix::AdjacencyMatrix;
use crate::provider::AdjacencyProvider;
use crate::types::NodeLabel;
use std::collections::HashMap;

/// A labeled graph stored as a node list plus an edge list.
#[derive(Debug, Clone, Default)]
pub struct EdgeListGraph {
    /// Node labels in matrix order.
    nodes: Vec<NodeLabel>,

    /// Edges as (from, to) label pairs. Direction is kept; the provider
    /// decides whether it matters.
    edges: Vec<(NodeLabel, NodeLabel)>,

    /// Label → first position in `nodes`.
    index: HashMap<NodeLabel, usize>,
}

impl PartialEq for EdgeListGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl Eq for EdgeListGraph {}

impl EdgeListGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from edges, adding nodes in order of first appearance.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<NodeLabel>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    /// Build a graph from raw node and edge lists without checking them.
    ///
    /// Repeated labels and edges naming undeclared nodes are kept as given;
    /// the provider reports them.
    pub fn from_parts(nodes: Vec<NodeLabel>, edges: Vec<(NodeLabel, NodeLabel)>) -> Self {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, label) in nodes.iter().enumerate() {
            index.entry(label.clone()).or_insert(i);
        }
        Self {
            nodes,
            edges,
            index,
        }
    }

    /// Add a node if absent. Returns its position.
    pub fn add_node(&mut self, label: impl Into<NodeLabel>) -> usize {
        let label = label.into();
        if let Some(&idx) = self.index.get(&label) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(label.clone(), idx);
        self.nodes.push(label);
        idx
    }

    /// Add an edge, adding either endpoint if it is not yet a node.
    pub fn add_edge(&mut self, from: impl Into<NodeLabel>, to: impl Into<NodeLabel>) {
        let from = from.into();
        let to = to.into();
        self.add_node(from.clone());
        self.add_node(to.clone());
        self.edges.push((from, to));
    }

    /// Position of a node label.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn nodes(&self) -> &[NodeLabel] {
        &self.nodes
    }

    pub fn edges(&self) -> &[(NodeLabel, NodeLabel)] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Adjacency provider for [`EdgeListGraph`]. Produces a 0/1 matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeListProvider;

impl EdgeListProvider {
    pub fn new() -> Self {
        Self
    }
}

impl AdjacencyProvider for EdgeListProvider {
    type Graph = EdgeListGraph;
    type Value = u8;

    fn adjacency_matrix(
        &self,
        graph: &EdgeListGraph,
        directed: bool,
    ) -> Result<AdjacencyMatrix<u8>> {
        let n = graph.nodes.len();

        let mut index: HashMap<&str, usize> = HashMap::with_capacity(n);
        for (i, label) in graph.nodes.iter().enumerate() {
            if index.insert(label.as_str(), i).is_some() {
                return Err(ColinkError::DuplicateNode(label.clone()));
            }
        }

        let lookup = |label: &NodeLabel| {
            index
                .get(label.as_str())
                .copied()
                .ok_or_else(|| ColinkError::UnknownNode(label.clone()))
        };

        let mut data = vec![0u8; n * n];
        for (from, to) in &graph.edges {
            let (i, j) = (lookup(from)?, lookup(to)?);
            data[i * n + j] = 1;
            if !directed {
                data[j * n + i] = 1;
            }
        }

        AdjacencyMatrix::square(n, data)?.with_labels(graph.nodes.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_orders_nodes_by_first_appearance() {
        let graph = EdgeListGraph::from_edges([("b", "a"), ("a", "c"), ("b", "c")]);
        assert_eq!(graph.nodes(), ["b", "a", "c"]);
        assert_eq!(graph.index_of("c"), Some(2));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = EdgeListGraph::new();
        assert_eq!(graph.add_node("x"), 0);
        assert_eq!(graph.add_node("y"), 1);
        assert_eq!(graph.add_node("x"), 0);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_add_edge_on_large_ring() {
        // Ring of 5k nodes; repeated endpoints resolve through the index.
        let n = 5_000;
        let mut graph = EdgeListGraph::new();
        for i in 0..n {
            graph.add_edge(format!("n{}", i), format!("n{}", (i + 1) % n));
            graph.add_edge(format!("n{}", i), format!("n{}", (i + 2) % n));
        }
        assert_eq!(graph.node_count(), n);
        assert_eq!(graph.edge_count(), 2 * n);
        assert_eq!(graph.index_of("n4999"), Some(n - 1));
        assert_eq!(graph.add_node("n0"), 0);
    }

    #[test]
    fn test_from_parts_keeps_first_position() {
        let nodes = vec!["a".into(), "b".into(), "a".into()];
        let graph = EdgeListGraph::from_parts(nodes, Vec::new());
        assert_eq!(graph.index_of("a"), Some(0));
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_directed_matrix() {
        let graph = EdgeListGraph::from_edges([("a", "b"), ("b", "c")]);
        let adj = EdgeListProvider.adjacency_matrix(&graph, true).unwrap();

        assert_eq!(adj.as_slice(), &[0, 1, 0, 0, 0, 1, 0, 0, 0]);
        assert_eq!(adj.row_labels().unwrap(), ["a", "b", "c"]);
        assert_eq!(adj.col_labels().unwrap(), ["a", "b", "c"]);
    }

    #[test]
    fn test_undirected_matrix_is_symmetric() {
        let graph = EdgeListGraph::from_edges([("a", "b"), ("b", "c")]);
        let adj = EdgeListProvider.adjacency_matrix(&graph, false).unwrap();

        assert_eq!(adj.as_slice(), &[0, 1, 0, 1, 0, 1, 0, 1, 0]);
        assert!(adj.is_symmetric().unwrap());
    }

    #[test]
    fn test_parallel_edges_and_self_loops() {
        let graph = EdgeListGraph::from_edges([("a", "b"), ("a", "b"), ("b", "b")]);
        let adj = EdgeListProvider.adjacency_matrix(&graph, true).unwrap();
        assert_eq!(adj.as_slice(), &[0, 1, 0, 1]);
    }

    #[test]
    fn test_isolated_nodes_kept() {
        let mut graph = EdgeListGraph::from_edges([("a", "b")]);
        graph.add_node("z");
        let adj = EdgeListProvider.adjacency_matrix(&graph, false).unwrap();
        assert_eq!(adj.rows(), 3);
        assert_eq!(adj.row(2), Some(&[0, 0, 0][..]));
    }

    #[test]
    fn test_unknown_node_rejected() {
        let graph = EdgeListGraph::from_parts(
            vec!["a".into()],
            vec![("a".into(), "ghost".into())],
        );
        let err = EdgeListProvider.adjacency_matrix(&graph, true).unwrap_err();
        assert!(matches!(err, ColinkError::UnknownNode(ref n) if n == "ghost"));
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let graph = EdgeListGraph::from_parts(vec!["a".into(), "a".into()], Vec::new());
        let err = EdgeListProvider.adjacency_matrix(&graph, false).unwrap_err();
        assert!(matches!(err, ColinkError::DuplicateNode(ref n) if n == "a"));
    }

    #[test]
    fn test_empty_graph() {
        let adj = EdgeListProvider
            .adjacency_matrix(&EdgeListGraph::new(), false)
            .unwrap();
        assert_eq!(adj.rows(), 0);
        assert!(adj.is_square());
    }
}
