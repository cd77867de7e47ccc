//! Diamond-shaped brush for injecting sand at pointer positions.

/// Covers every cell within Manhattan distance `extent - 1` of the centre.
/// Extent `0` covers nothing and extent `1` a single cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Brush {
    extent: u32,
}

impl Brush {
    #[must_use]
    pub const fn new(extent: u32) -> Self {
        Self { extent }
    }

    #[must_use]
    pub const fn extent(self) -> u32 {
        self.extent
    }

    /// Grid cells covered when centred on `(cx, cy)`, clipped to a
    /// `width x height` grid, column by column from the left.
    ///
    /// Column and row ranges are clipped before iterating, so the cost is
    /// bounded by the cells placed, not by the extent.
    pub fn footprint(
        self,
        cx: isize,
        cy: isize,
        width: usize,
        height: usize,
    ) -> impl Iterator<Item = (usize, usize)> {
        let reach = i64::from(self.extent) - 1;
        let (cx, cy) = (cx as i64, cy as i64);
        let max_x = i64::try_from(width).unwrap_or(i64::MAX) - 1;
        let max_y = i64::try_from(height).unwrap_or(i64::MAX) - 1;

        let columns = cx.saturating_sub(reach).max(0)..=cx.saturating_add(reach).min(max_x);
        columns.flat_map(move |x| {
            // x lies within reach of cx here, so the remaining budget is >= 0.
            let budget = reach - (x - cx).abs();
            let rows = cy.saturating_sub(budget).max(0)..=cy.saturating_add(budget).min(max_y);
            rows.map(move |y| (x as usize, y as usize))
        })
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(3)
    }
}
