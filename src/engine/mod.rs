mod region;
mod rule;

pub use self::region::Region;
use crate::{
    Pos2,
    render::{Frame, Style},
};
use tracing::{debug, trace};

#[derive(Debug)]
pub struct GameOfLife {
    alive: Vec<Pos2>,
    region: Region,
}

impl GameOfLife {
    /// Creates a simulation from a list of live cells
    ///
    /// The list may be in any order and hold duplicates. Every cell must be
    /// in the non-negative quadrant.
    pub fn from_alive(mut alive: Vec<Pos2>) -> Self {
        debug_assert!(
            alive.iter().all(Pos2::is_non_negative),
            "live cells must have non-negative coordinates"
        );
        alive.sort_unstable();
        alive.dedup();

        let region = Region::enclosing(&alive);
        Self { alive, region }
    }

    /// Replaces the live cells with the next generation
    ///
    /// The region grows afterwards, so the neighbor count only ever sees
    /// the region of the previous generation.
    pub fn advance(&mut self) {
        let next = next_generation(&self.alive, self.region);
        trace!(alive = next.len(), "advanced generation");

        if self.region.expand_to(&next) {
            debug!(
                max_x = self.region.max_x,
                max_y = self.region.max_y,
                "bounding region grew"
            );
        }
        self.alive = next;
    }

    /// A drawable view of the current generation
    #[inline]
    pub fn frame(&self, style: Style) -> Frame<'_> {
        Frame::new(&self.alive, self.region, style)
    }

    /// The live cells, sorted row by row
    #[inline]
    pub fn alive(&self) -> &[Pos2] {
        &self.alive
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    #[inline]
    pub fn take(self) -> Vec<Pos2> {
        self.alive
    }
}

/// Computes the generation following `alive`
///
/// `alive` must be strictly ascending (the order of [`Pos2`]) and lie within
/// `region`. Only cells inside the region are candidates, so nothing is born
/// at a negative coordinate and cells on row 0 or column 0 see no neighbors
/// beyond the edge.
///
/// The result is strictly ascending as well.
pub fn next_generation(alive: &[Pos2], region: Region) -> Vec<Pos2> {
    debug_assert!(
        alive.windows(2).all(|w| w[0] < w[1]),
        "input is not properly sorted"
    );

    // every cell that is alive or touches a live cell
    let mut candidates: Vec<Pos2> = alive
        .iter()
        .flat_map(|&cell| cell.neighborhood())
        .filter(|&pos| region.contains(pos))
        .collect();
    candidates.sort_unstable();
    candidates.dedup();

    let table = rule::rule_table();
    candidates
        .into_iter()
        .filter(|&pos| table[neighborhood_block(alive, pos)])
        .collect()
}

/// Bit block of the 3x3 neighborhood around `center`, as indexed by the rule table
fn neighborhood_block(alive: &[Pos2], center: Pos2) -> usize {
    // only the rows above, at, and below the center can contribute
    let start = alive.partition_point(|pos| pos.y < center.y - 1);
    let end = alive.partition_point(|pos| pos.y <= center.y + 1);
    let rows = &alive[start..end];

    center
        .neighborhood()
        .enumerate()
        .filter(|(_, pos)| rows.binary_search(pos).is_ok())
        .fold(0, |block, (bit, _)| block | 1 << bit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(coords: &[(i32, i32)]) -> Vec<Pos2> {
        let mut cells: Vec<Pos2> = coords.iter().copied().map(Pos2::from).collect();
        cells.sort();
        cells
    }

    fn step(coords: &[(i32, i32)]) -> Vec<Pos2> {
        let alive = cells(coords);
        next_generation(&alive, Region::enclosing(&alive))
    }

    #[test]
    fn isolated_cell_dies() {
        assert!(step(&[(4, 4)]).is_empty());
    }

    #[test]
    fn pair_dies_of_underpopulation() {
        assert!(step(&[(4, 4), (5, 4)]).is_empty());
    }

    #[test]
    fn block_is_a_still_life() {
        let block = [(1, 1), (2, 1), (1, 2), (2, 2)];

        assert_eq!(step(&block), cells(&block));
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = cells(&[(1, 2), (2, 2), (3, 2)]);
        let vertical = cells(&[(2, 1), (2, 2), (2, 3)]);

        let mut game = GameOfLife::from_alive(horizontal.clone());
        game.advance();
        assert_eq!(game.alive(), vertical.as_slice());
        game.advance();
        assert_eq!(game.alive(), horizontal.as_slice());
    }

    #[test]
    fn survivors_need_two_or_three_neighbors() {
        // center (2, 2) with two neighbors survives
        assert!(step(&[(1, 1), (2, 2), (3, 3)]).contains(&Pos2::new(2, 2)));
        // center (2, 2) with three neighbors survives
        assert!(step(&[(1, 1), (3, 1), (2, 2), (2, 3)]).contains(&Pos2::new(2, 2)));
        // center (2, 2) with four neighbors dies
        assert!(!step(&[(1, 1), (3, 1), (2, 2), (1, 3), (3, 3)]).contains(&Pos2::new(2, 2)));
    }

    #[test]
    fn births_need_exactly_three_neighbors() {
        // (2, 2) is dead in all of these
        assert!(step(&[(1, 1), (3, 1), (2, 3)]).contains(&Pos2::new(2, 2)));
        assert!(!step(&[(1, 1), (3, 3)]).contains(&Pos2::new(2, 2)));
        assert!(!step(&[(1, 1), (3, 1), (1, 3), (3, 3)]).contains(&Pos2::new(2, 2)));
    }

    #[test]
    fn next_generation_is_pure() {
        let alive = cells(&[(1, 1), (2, 1), (3, 1), (5, 4), (6, 4), (5, 5), (7, 8)]);
        let region = Region::enclosing(&alive);

        let first = next_generation(&alive, region);
        let second = next_generation(&alive, region);

        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn nothing_is_born_above_row_zero() {
        // a blinker on row 0 cannot reach row -1 on its vertical phase
        assert_eq!(step(&[(1, 0), (2, 0), (3, 0)]), cells(&[(2, 0), (2, 1)]));
    }

    #[test]
    fn nothing_is_born_left_of_column_zero() {
        assert_eq!(step(&[(0, 1), (0, 2), (0, 3)]), cells(&[(0, 2), (1, 2)]));
    }

    #[test]
    fn from_alive_has_set_semantics() {
        let game = GameOfLife::from_alive(vec![
            Pos2::new(3, 1),
            Pos2::new(1, 1),
            Pos2::new(3, 1),
            Pos2::new(0, 4),
        ]);

        assert_eq!(game.alive(), cells(&[(1, 1), (3, 1), (0, 4)]).as_slice());
        assert_eq!(game.region(), Region::new(4, 5));
    }

    #[test]
    fn glider_travels_and_region_grows() {
        let glider = cells(&[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);
        let mut game = GameOfLife::from_alive(glider.clone());

        let mut last = game.region();
        for _ in 0..4 {
            game.advance();
            let region = game.region();
            assert!(region.max_x >= last.max_x && region.max_y >= last.max_y);
            assert!(game.alive().iter().all(|&pos| region.contains(pos)));
            last = region;
        }

        let shifted: Vec<Pos2> = glider.iter().map(|&pos| pos + Pos2::one()).collect();
        assert_eq!(game.alive(), shifted.as_slice());
        assert_eq!(game.region(), Region::new(5, 5));
    }

    #[test]
    fn region_survives_extinction() {
        let mut game = GameOfLife::from_alive(vec![Pos2::new(5, 5)]);
        let region = game.region();

        game.advance();
        game.advance();

        assert_eq!(game.alive_count(), 0);
        assert_eq!(game.region(), region);
    }
}
