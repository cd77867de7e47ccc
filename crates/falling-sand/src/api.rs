//! Relative-offset view of the grid around the cell being updated.

use crate::Grid;

/// Neighborhood accessor for one cell. Offsets that leave the grid read as
/// blocked and are never dereferenced, so rules written against this API
/// cannot step outside `[0, width)` at the edges.
#[derive(Debug)]
pub struct SandApi<'a> {
    grid: &'a mut Grid,
    x: usize,
    y: usize,
}

impl<'a> SandApi<'a> {
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn new(grid: &'a mut Grid, x: usize, y: usize) -> Self {
        assert!(
            x < grid.width() && y < grid.height(),
            "cell ({x}, {y}) is outside the {}x{} grid",
            grid.width(),
            grid.height(),
        );
        Self { grid, x, y }
    }

    fn resolve(&self, dx: isize, dy: isize) -> Option<(usize, usize)> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < self.grid.width() && y < self.grid.height()).then_some((x, y))
    }

    /// True when the offset is on the grid and holds no grain.
    #[must_use]
    pub fn is_vacant(&self, dx: isize, dy: isize) -> bool {
        self.resolve(dx, dy)
            .is_some_and(|(x, y)| self.grid.get(x, y).is_empty())
    }

    /// Swap the current cell with the one at the offset.
    ///
    /// # Panics
    ///
    /// Panics if the offset leaves the grid.
    pub fn swap_with(&mut self, dx: isize, dy: isize) {
        let Some((x, y)) = self.resolve(dx, dy) else {
            panic!(
                "offset ({dx}, {dy}) from ({}, {}) leaves the grid",
                self.x, self.y
            );
        };
        self.grid.swap(self.x, self.y, x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;
    use proptest::prelude::*;

    #[test]
    fn vacancy_reflects_grid_contents() {
        let mut grid = Grid::from_art(&["...", "S.."]);
        let api = SandApi::new(&mut grid, 1, 1);
        assert!(api.is_vacant(0, -1));
        assert!(!api.is_vacant(-1, -1));
        assert!(api.is_vacant(1, -1));
        assert!(api.is_vacant(0, 0));
    }

    #[test]
    fn off_grid_offsets_read_as_blocked() {
        let mut grid = Grid::new(3, 3);
        let api = SandApi::new(&mut grid, 0, 0);
        assert!(!api.is_vacant(-1, 0));
        assert!(!api.is_vacant(0, -1));
        assert!(!api.is_vacant(3, 0));
        assert!(!api.is_vacant(0, 3));
    }

    #[test]
    fn swap_with_moves_grain() {
        let mut grid = Grid::from_art(&[".S.", "..."]);
        let mut api = SandApi::new(&mut grid, 1, 1);
        api.swap_with(1, -1);
        assert!(grid.get(1, 1).is_empty());
        assert_eq!(grid.get(2, 0).seed(), Some(4));
    }

    #[test]
    #[should_panic(expected = "leaves the grid")]
    fn swap_with_off_grid_panics() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 1, Cell::sand(1));
        let mut api = SandApi::new(&mut grid, 0, 1);
        api.swap_with(-1, -1);
    }

    proptest! {
        #[test]
        fn prop_vacancy_never_reads_off_grid(
            x in 0usize..8,
            y in 0usize..8,
            dx in -10isize..10,
            dy in -10isize..10,
        ) {
            let mut grid = Grid::new(8, 8);
            let api = SandApi::new(&mut grid, x, y);
            let on_grid = grid_contains(x as isize + dx, y as isize + dy);
            prop_assert_eq!(api.is_vacant(dx, dy), on_grid);
        }
    }

    fn grid_contains(x: isize, y: isize) -> bool {
        (0..8).contains(&x) && (0..8).contains(&y)
    }
}
