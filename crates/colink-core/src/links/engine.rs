use crate::error::Result;
use crate::links::{compute_with_config, CommonLinkConfig};
use crate::matrix::{AdjacencyMatrix, CommonLinkMatrix};
use crate::provider::AdjacencyProvider;
use crate::types::Truthy;
use std::sync::Arc;

/// Common-link queries over graphs rather than precomputed matrices
pub trait GraphToCommonLink: Send + Sync {
    /// Graph representation accepted by this engine.
    type Graph: ?Sized;

    /// Build the graph's adjacency matrix and compute its common links.
    ///
    /// `directed == false` collapses edge direction first, so the result
    /// counts mutual neighbours. `directed == true` counts directed
    /// two-hop paths i→k→j.
    fn compute_from_graph(&self, graph: &Self::Graph, directed: bool) -> Result<CommonLinkMatrix>;

    /// Undirected common links (the default reading).
    fn compute_from_graph_undirected(&self, graph: &Self::Graph) -> Result<CommonLinkMatrix> {
        self.compute_from_graph(graph, false)
    }
}

/// Common-link engine bound to one adjacency provider
pub struct CommonLinkEngine<P: AdjacencyProvider> {
    provider: Arc<P>,
    config: CommonLinkConfig,
}

impl<P: AdjacencyProvider> CommonLinkEngine<P> {
    /// Create a new engine with the default configuration
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            config: CommonLinkConfig::default(),
        }
    }

    /// Create a new engine with a custom configuration
    pub fn with_config(provider: Arc<P>, config: CommonLinkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { provider, config })
    }

    pub fn config(&self) -> &CommonLinkConfig {
        &self.config
    }

    pub fn provider(&self) -> &Arc<P> {
        &self.provider
    }

    /// Compute common links for a matrix that is already built.
    pub fn compute<T: Truthy>(&self, adj: &AdjacencyMatrix<T>) -> Result<CommonLinkMatrix> {
        compute_with_config(adj, &self.config)
    }
}

impl<P: AdjacencyProvider> GraphToCommonLink for CommonLinkEngine<P> {
    type Graph = P::Graph;

    fn compute_from_graph(&self, graph: &P::Graph, directed: bool) -> Result<CommonLinkMatrix> {
        let adj = self.provider.adjacency_matrix(graph, directed)?;
        log::debug!(
            "Provider built {}x{} adjacency matrix (directed={})",
            adj.rows(),
            adj.cols(),
            directed
        );
        self.compute(&adj)
    }
}

/// One-shot form of [`GraphToCommonLink::compute_from_graph`] with the
/// default configuration.
pub fn compute_from_graph<P: AdjacencyProvider>(
    provider: &P,
    graph: &P::Graph,
    directed: bool,
) -> Result<CommonLinkMatrix> {
    let adj = provider.adjacency_matrix(graph, directed)?;
    compute_with_config(&adj, &CommonLinkConfig::default())
}
