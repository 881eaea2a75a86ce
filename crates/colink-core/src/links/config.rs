use crate::error::{ColinkError, Result};

/// Configuration for common-link computation
#[derive(Debug, Clone)]
pub struct CommonLinkConfig {
    /// Node count at or above which rows are computed on the rayon pool.
    /// Default: 256.
    pub parallel_threshold: usize,

    /// Largest accepted node count. Input and output are both n×n, so this
    /// bounds memory. Default: 10_000 (400 MB of output counts).
    pub max_nodes: usize,

    /// Allow the parallel path at all. Default: true.
    pub parallel: bool,
}

impl Default for CommonLinkConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 256,
            max_nodes: 10_000,
            parallel: true,
        }
    }
}

impl CommonLinkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn with_max_nodes(mut self, max: usize) -> Self {
        self.max_nodes = max;
        self
    }

    /// Force the sequential path regardless of size.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_nodes == 0 {
            return Err(ColinkError::Validation("max_nodes must be > 0".into()));
        }

        if self.parallel_threshold == 0 {
            return Err(ColinkError::Validation(
                "parallel_threshold must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Whether a matrix with `n` nodes takes the parallel path.
    pub(crate) fn use_parallel(&self, n: usize) -> bool {
        self.parallel && n >= self.parallel_threshold
    }
}
