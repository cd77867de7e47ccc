//! Falling sand simulation engine.
//!
//! `y = 0` is the ground row and `y` grows upward; renderers that draw
//! top-down flip rows themselves.

pub mod api;
pub mod brush;
pub mod cell;
pub mod config;
pub mod engine;
pub mod error;
mod fall;
pub mod random;
mod universe;

use std::fmt;
use std::iter;

pub use brush::Brush;
pub use cell::{Cell, Sand};
pub use config::SimulationConfig;
pub use engine::Simulation;
pub use error::SimulationError;
pub use random::RandomSource;
pub use universe::Universe;

/// Dense 2D grid of cells in one row-major buffer, ground row first.
///
/// Coordinates outside the grid are a caller bug: every accessor panics on
/// them rather than clamping.
#[derive(Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Empty grid of the given size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or the cell count overflows.
    /// Use [`Grid::try_new`] for untrusted sizes.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    /// Empty grid of the given size.
    ///
    /// # Errors
    ///
    /// [`SimulationError::ZeroDimension`] if either dimension is zero,
    /// [`SimulationError::TooLarge`] if `width * height` overflows.
    pub fn try_new(width: usize, height: usize) -> Result<Self, SimulationError> {
        if width == 0 || height == 0 {
            return Err(SimulationError::ZeroDimension { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(SimulationError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            cells: iter::repeat_with(Cell::default).take(len).collect(),
        })
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether a signed coordinate lies on the grid.
    #[must_use]
    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height,
        );
        y * self.width + x
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    /// Overwrite a cell. A grain already there is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let i = self.index(x, y);
        self.cells[i] = cell;
    }

    /// Exchange the contents of two cells.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the grid.
    pub fn swap(&mut self, x1: usize, y1: usize, x2: usize, y2: usize) {
        let a = self.index(x1, y1);
        let b = self.index(x2, y2);
        self.cells.swap(a, b);
    }

    /// Row-major view of every cell, ground row first.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells holding sand.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_sand()).count()
    }
}

/// Top row first, `S` for sand and `.` for empty.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width).rev() {
            for cell in row {
                f.write_str(if cell.is_sand() { "S" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl Grid {
    /// Build a grid from rows drawn top row first. `S` is sand seeded with
    /// its buffer index; anything else is empty.
    pub(crate) fn from_art(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        let mut grid = Self::new(width, height);
        for (row_from_top, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "ragged art row {row:?}");
            let y = height - 1 - row_from_top;
            for (x, ch) in row.chars().enumerate() {
                if ch == 'S' {
                    grid.set(x, y, Cell::sand((y * width + x) as u64));
                }
            }
        }
        grid
    }

    /// Rebuild a grid from a [`Grid::seeds`] snapshot.
    pub(crate) fn from_seeds(width: usize, seeds: &[Option<u64>]) -> Self {
        let mut grid = Self::new(width, seeds.len() / width);
        for (i, seed) in seeds.iter().enumerate() {
            if let Some(seed) = *seed {
                grid.set(i % width, i / width, Cell::sand(seed));
            }
        }
        grid
    }

    /// Seed at every cell, for comparing layouts by particle identity.
    pub(crate) fn seeds(&self) -> Vec<Option<u64>> {
        self.cells.iter().map(Cell::seed).collect()
    }
}
