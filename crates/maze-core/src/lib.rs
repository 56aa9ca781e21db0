//! **maze-core** — grid model and maze parsing for character-grid mazes.
//!
//! This crate provides the foundational types for the maze solver: geometry
//! primitives, the closed cell-kind vocabulary, a possibly-ragged grid of
//! cell kinds, and the validating parser that turns raw text rows into a
//! [`Maze`] with a single start and one or more exits.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod maze;

pub use cell::CellKind;
pub use geom::Point;
pub use grid::Grid;
pub use maze::{Maze, MazeError};
