use std::{
    cmp::Ordering,
    ops::{Add, Sub},
};

/// Offsets of the 3x3 neighborhood around a cell, row by row, center included.
const NEIGHBORHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos2 {
    pub x: i32,
    pub y: i32,
}
impl Pos2 {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn zero() -> Self {
        Self { x: 0, y: 0 }
    }
    #[inline]
    pub fn one() -> Self {
        Self { x: 1, y: 1 }
    }

    /// Whether this position lies in the non-negative quadrant
    #[inline]
    pub fn is_non_negative(&self) -> bool {
        self.x >= 0 && self.y >= 0
    }

    /// The 3x3 block centered on this position, in row-major order
    ///
    /// The center is the fifth item. Positions may be negative.
    pub fn neighborhood(self) -> impl Iterator<Item = Pos2> {
        NEIGHBORHOOD
            .into_iter()
            .map(move |(x, y)| self + Pos2 { x, y })
    }
}
impl Default for Pos2 {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}
impl From<(i32, i32)> for Pos2 {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
impl PartialOrd for Pos2 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pos2 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // rows first, so a sorted slice reads top-to-bottom, left-to-right
        Ord::cmp(&self.y, &other.y).then(Ord::cmp(&self.x, &other.x))
    }
}
impl Add for Pos2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub for Pos2 {
    type Output = Pos2;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
