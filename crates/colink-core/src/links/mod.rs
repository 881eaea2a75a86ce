mod config;
mod compute;
mod engine;

pub use config::CommonLinkConfig;
pub use compute::{compute, compute_with_config};
pub use engine::{compute_from_graph, CommonLinkEngine, GraphToCommonLink};
