//! Simulation settings.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::brush::Brush;
use crate::error::SimulationError;

/// Grid size, seeding and brush size. Missing JSON fields take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    /// Fixed seed for a reproducible run; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub brush_extent: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            seed: None,
            brush_extent: 3,
        }
    }
}

impl SimulationConfig {
    /// # Errors
    ///
    /// Returns [`SimulationError::Config`] if `json` is not a valid config
    /// document.
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        let config: Self = serde_json::from_str(json)?;
        debug!("loaded simulation config: {config:?}");
        Ok(config)
    }

    #[must_use]
    pub const fn brush(&self) -> Brush {
        Brush::new(self.brush_extent)
    }
}
