mod traits;
mod edge_list;
#[cfg(feature = "petgraph")]
mod petgraph_provider;

pub use traits::AdjacencyProvider;
pub use edge_list::{EdgeListGraph, EdgeListProvider};
#[cfg(feature = "petgraph")]
pub use petgraph_provider::PetgraphProvider;
