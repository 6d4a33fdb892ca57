//! Line-by-line text rendering of a generation.
//!
//! Rows are produced top to bottom, row 0 first. Each row is built only when
//! the iterator reaches it, so a frame never holds more than one line.

use crate::{Pos2, engine::Region};
use crossterm::style::Stylize;
use std::{fmt, fmt::Write, iter::FusedIterator};

/// Glyph for a live cell
pub const LIVE: char = '\u{25A0}';
/// Glyph for a dead cell when the background is shown
pub const DEAD: char = '\u{00B7}';
/// Glyph for a dead cell when the background is hidden
pub const BLANK: char = ' ';

/// How a frame is drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    /// Draw dead cells with [`DEAD`] instead of [`BLANK`]
    pub show_background: bool,
    /// Wrap live cells in a foreground color escape
    pub use_color: bool,
}

impl Style {
    #[inline]
    fn background(&self) -> char {
        if self.show_background { DEAD } else { BLANK }
    }
}

/// Renders `alive` over `region`
///
/// `alive` must be sorted in [`Pos2`] order, as held by
/// [`GameOfLife`](crate::GameOfLife).
#[inline]
pub fn render(alive: &[Pos2], region: Region, style: Style) -> Lines<'_> {
    Lines::new(alive, region, style)
}

/// A borrowed view of one generation that can be rendered any number of times
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    alive: &'a [Pos2],
    region: Region,
    style: Style,
}

impl<'a> Frame<'a> {
    pub fn new(alive: &'a [Pos2], region: Region, style: Style) -> Self {
        Self {
            alive,
            region,
            style,
        }
    }

    /// A fresh sequence of lines, starting at row 0
    #[inline]
    pub fn lines(&self) -> Lines<'a> {
        render(self.alive, self.region, self.style)
    }

    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.lines().enumerate() {
            if row > 0 {
                f.write_char('\n')?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}

/// Lazy iterator over the rows of a frame
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    /// live cells not yet drawn, starting at the current row
    rest: &'a [Pos2],
    region: Region,
    style: Style,
    row: i32,
}

impl<'a> Lines<'a> {
    fn new(alive: &'a [Pos2], region: Region, style: Style) -> Self {
        Self {
            rest: alive,
            region,
            style,
            row: 0,
        }
    }

    fn draw_row(&self, cells: &[Pos2]) -> String {
        let mut line = String::with_capacity(self.region.width() * LIVE.len_utf8());
        let mut cells = cells.iter().map(|pos| pos.x).peekable();

        for x in 0..=self.region.max_x {
            if cells.next_if_eq(&x).is_none() {
                line.push(self.style.background());
            } else if self.style.use_color {
                // writing into a String cannot fail
                let _ = write!(line, "{}", LIVE.green());
            } else {
                line.push(LIVE);
            }
        }
        line
    }
}

impl Iterator for Lines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row > self.region.max_y {
            return None;
        }
        let row = self.row;

        // cells above the current row can only be out of order input
        let start = self.rest.partition_point(|pos| pos.y < row);
        let end = self.rest.partition_point(|pos| pos.y <= row);
        let line = self.draw_row(&self.rest[start..end]);

        self.rest = &self.rest[end..];
        self.row += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.region.max_y + 1 - self.row).max(0) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Lines<'_> {}
impl FusedIterator for Lines<'_> {}
