mod adjacency;
mod common_link;

pub use adjacency::AdjacencyMatrix;
pub use common_link::{CommonLinkMatrix, LinkPair};
