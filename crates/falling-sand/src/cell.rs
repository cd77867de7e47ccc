//! Cell and particle types for the simulation grid.

use std::fmt;

/// One grain of sand.
///
/// The seed is fixed at creation and only feeds color variation in the
/// renderer; physics never reads it. Grains are neither `Clone` nor `Copy`:
/// the engine relocates them by swapping cells, so each grain lives in
/// exactly one cell.
#[derive(PartialEq, Eq, Hash, Debug)]
pub struct Sand {
    seed: u64,
}

impl Sand {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

/// Contents of one grid slot.
#[derive(PartialEq, Eq, Hash, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Sand(Sand),
}

impl Cell {
    #[must_use]
    pub const fn sand(seed: u64) -> Self {
        Self::Sand(Sand::new(seed))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub const fn is_sand(&self) -> bool {
        matches!(self, Self::Sand(_))
    }

    /// Seed of the grain in this cell, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        match self {
            Self::Empty => None,
            Self::Sand(sand) => Some(sand.seed()),
        }
    }
}

impl From<Sand> for Cell {
    fn from(sand: Sand) -> Self {
        Self::Sand(sand)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Sand(sand) => write!(f, "Sand({})", sand.seed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cell_default_is_empty() {
        assert_eq!(Cell::default(), Cell::Empty);
        assert!(Cell::default().is_empty());
        assert!(!Cell::default().is_sand());
        assert_eq!(Cell::default().seed(), None);
    }

    #[test]
    fn cell_constructors() {
        let cell = Cell::sand(42);
        assert!(cell.is_sand());
        assert!(!cell.is_empty());
        assert_eq!(cell, Cell::from(Sand::new(42)));
    }

    #[test]
    fn cell_display() {
        assert_eq!(format!("{}", Cell::Empty), "Empty");
        assert_eq!(format!("{}", Cell::sand(7)), "Sand(7)");
    }

    proptest! {
        #[test]
        fn prop_seed_survives_wrapping(seed in any::<u64>()) {
            let sand = Sand::new(seed);
            prop_assert_eq!(sand.seed(), seed);
            prop_assert_eq!(Cell::from(sand).seed(), Some(seed));
        }
    }
}
