//! Per-frame update loop.

use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::api::SandApi;
use crate::brush::Brush;
use crate::cell::{Cell, Sand};
use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::fall;
use crate::random::RandomSource;
use crate::Grid;

/// Largest integer an IEEE double holds exactly. Fresh seeds stay below it
/// so JS renderers receive them losslessly.
const MAX_SEED: f64 = 9_007_199_254_740_991.0;

/// Owns the grid and the random source that drives scan order and
/// tie-breaks.
///
/// The engine keeps no state between frames besides the grid itself.
#[derive(Debug)]
pub struct Simulation<R: RandomSource = SmallRng> {
    grid: Grid,
    rng: R,
}

impl Simulation {
    /// Empty simulation seeded from OS entropy.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        debug!("creating {width}x{height} simulation with entropy seed");
        Self::from_grid(Grid::new(width, height), SmallRng::from_entropy())
    }

    /// Build from a config: fixed seed if one is given, entropy otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured dimensions are invalid.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, SimulationError> {
        let grid = Grid::try_new(config.width, config.height)?;
        let rng = config.seed.map_or_else(
            || {
                debug!(
                    "creating {}x{} simulation with entropy seed",
                    config.width, config.height
                );
                SmallRng::from_entropy()
            },
            |seed| {
                debug!(
                    "creating {}x{} simulation with seed {seed}",
                    config.width, config.height
                );
                SmallRng::seed_from_u64(seed)
            },
        );
        Ok(Self::from_grid(grid, rng))
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Empty simulation driven by an injected random source.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_rng(width: usize, height: usize, rng: R) -> Self {
        Self::from_grid(Grid::new(width, height), rng)
    }

    /// Resume from an existing grid.
    pub fn from_grid(grid: Grid, rng: R) -> Self {
        Self { grid, rng }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> &Cell {
        self.grid.get(x, y)
    }

    /// Place (or clear) a cell between frames.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.grid.set(x, y, cell);
    }

    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.grid.occupied_count()
    }

    /// Give the grid back, ending the simulation.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// A new grain whose seed is drawn from the engine's random source.
    pub fn spawn_sand(&mut self) -> Sand {
        let seed = (self.rng.next_unit() * MAX_SEED).floor() as u64;
        Sand::new(seed)
    }

    /// Stamp fresh grains over the brush footprint centred on `(cx, cy)`.
    /// The centre may lie off the grid; the footprint is clipped.
    ///
    /// Returns how many cells were filled.
    pub fn add_sand(&mut self, cx: isize, cy: isize, brush: Brush) -> usize {
        let mut placed = 0;
        for (x, y) in brush.footprint(cx, cy, self.grid.width(), self.grid.height()) {
            let sand = self.spawn_sand();
            self.grid.set(x, y, Cell::Sand(sand));
            placed += 1;
        }
        trace!(
            "placed {placed} grains around ({cx}, {cy}) with extent {}",
            brush.extent()
        );
        placed
    }

    /// Advance the simulation by one frame.
    ///
    /// Rows are scanned from the ground up. Each row draws a fresh coin flip
    /// for its horizontal direction so that no side is systematically
    /// resolved first. The grid is updated in place in a single pass; a
    /// grain only ever moves down, into a row that has already been scanned,
    /// so it moves at most once per frame.
    pub fn advance(&mut self) {
        let width = self.grid.width();
        for y in 0..self.grid.height() {
            let left_to_right = self.rng.next_bool();
            for i in 0..width {
                let x = if left_to_right { i } else { width - 1 - i };
                self.update_cell(x, y);
            }
        }
    }

    fn update_cell(&mut self, x: usize, y: usize) {
        if y == 0 || self.grid.get(x, y).is_empty() {
            return;
        }
        let mut api = SandApi::new(&mut self.grid, x, y);
        fall::update_sand(&mut api, &mut self.rng);
    }
}
