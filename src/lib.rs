//! Sparse Conway's Game of Life with a line-by-line terminal renderer.

pub mod engine;
pub mod patterns;
pub mod pos;
pub mod render;

pub use engine::{GameOfLife, Region, next_generation};
pub use patterns::Pattern;
pub use pos::Pos2;
pub use render::{Frame, Lines, Style, render};
