//! Browser-facing wrapper around [`Simulation`].
//!
//! The JS draw loop calls `tick`, then `addSand` while the pointer is down,
//! then reads `occupancy`/`seedAt` to paint. Coordinates are ground-up, like
//! the engine's; the canvas flips rows.

use wasm_bindgen::prelude::*;

use crate::brush::Brush;
use crate::config::SimulationConfig;
use crate::engine::Simulation;
use crate::error::SimulationError;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    sim: Simulation,
    brush: Brush,
}

#[wasm_bindgen]
impl Universe {
    /// Entropy-seeded universe with the default brush.
    ///
    /// # Errors
    ///
    /// Fails if either dimension is zero or the grid is too large.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize) -> Result<Universe, JsError> {
        let config = SimulationConfig {
            width,
            height,
            ..SimulationConfig::default()
        };
        Ok(Self::build(&config)?)
    }

    /// Universe from a JSON [`SimulationConfig`] document.
    ///
    /// # Errors
    ///
    /// Fails if the document does not parse or describes an invalid grid.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<Universe, JsError> {
        let config = SimulationConfig::from_json(json)?;
        Ok(Self::build(&config)?)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.sim.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.sim.height()
    }

    pub fn tick(&mut self) {
        self.sim.advance();
    }

    /// Paint sand around a pointer cell, which may be off the grid.
    #[wasm_bindgen(js_name = addSand)]
    pub fn add_sand(&mut self, x: i32, y: i32) -> usize {
        self.sim.add_sand(x as isize, y as isize, self.brush)
    }

    /// Row-major occupancy, ground row first: 1 for sand, 0 for empty.
    #[must_use]
    pub fn occupancy(&self) -> Vec<u8> {
        self.sim
            .grid()
            .cells()
            .iter()
            .map(|cell| u8::from(cell.is_sand()))
            .collect()
    }

    /// Color seed of the grain at `(x, y)`. Seeds spawned here stay below
    /// 2^53 and so convert exactly.
    #[wasm_bindgen(js_name = seedAt)]
    #[must_use]
    pub fn seed_at(&self, x: usize, y: usize) -> Option<f64> {
        self.sim.get(x, y).seed().map(|seed| seed as f64)
    }

    #[wasm_bindgen(js_name = particleCount)]
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.sim.particle_count()
    }
}

impl Universe {
    fn build(config: &SimulationConfig) -> Result<Self, SimulationError> {
        Ok(Self {
            sim: Simulation::from_config(config)?,
            brush: config.brush(),
        })
    }
}
