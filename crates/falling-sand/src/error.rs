//! Errors raised while building a simulation.

use thiserror::Error;

/// Construction-time failures. A running simulation never fails; only
/// building one from bad dimensions or a bad config document can.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("a {width}x{height} grid has more cells than fit in memory")]
    TooLarge { width: usize, height: usize },

    #[error("invalid simulation config: {0}")]
    Config(#[from] serde_json::Error),
}
