use crate::Pos2;

/// The origin-anchored rectangle the simulation and renderer work within
///
/// Both bounds are inclusive. The region only ever grows, and only in the
/// positive x/y direction: cells never appear left of column 0 or above
/// row 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region {
    pub max_x: i32,
    pub max_y: i32,
}

impl Region {
    #[inline]
    pub const fn new(max_x: i32, max_y: i32) -> Self {
        Self { max_x, max_y }
    }

    /// The smallest region holding `cells` plus a one cell margin on the
    /// positive edges
    pub fn enclosing(cells: &[Pos2]) -> Self {
        let mut region = Self::default();
        region.expand_to(cells);
        region
    }

    /// Grows the region so every cell keeps a one cell margin to the max
    /// edges
    ///
    /// Returns whether the region changed.
    pub fn expand_to(&mut self, cells: &[Pos2]) -> bool {
        let before = *self;
        for cell in cells {
            self.max_x = self.max_x.max(cell.x + 1);
            self.max_y = self.max_y.max(cell.y + 1);
        }
        *self != before
    }

    #[inline]
    pub fn contains(&self, pos: Pos2) -> bool {
        (0..=self.max_x).contains(&pos.x) && (0..=self.max_y).contains(&pos.y)
    }

    /// Number of columns, `max_x + 1`
    #[inline]
    pub fn width(&self) -> usize {
        self.max_x as usize + 1
    }

    /// Number of rows, `max_y + 1`
    #[inline]
    pub fn height(&self) -> usize {
        self.max_y as usize + 1
    }
}
