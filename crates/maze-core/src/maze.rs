//! Maze parsing and validation.
//!
//! A [`Maze`] is built from raw text rows in a single linear pass. The first
//! malformed character aborts parsing; the caller never sees a partially
//! built maze.

use std::fmt;

use crate::cell::CellKind;
use crate::geom::Point;
use crate::grid::Grid;

/// A parsed maze: the grid plus its single start and one-or-more exits.
///
/// Topology is immutable after parsing; searches track their annotations in
/// their own side structures.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    start: Point,
    ends: Vec<Point>,
}

impl Maze {
    /// Parse raw text rows (line terminators already stripped) into a maze.
    ///
    /// Fails on the first character outside `{#, E, ^, space}` and on a
    /// second `^`. After a clean scan, a missing `^` is reported before a
    /// missing `E`.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, MazeError> {
        let mut grid_rows = Vec::with_capacity(rows.len());
        let mut start = None;
        let mut ends = Vec::new();

        for (row_idx, row) in rows.iter().enumerate() {
            let mut kinds = Vec::new();
            for (col_idx, ch) in row.as_ref().chars().enumerate() {
                let pos = Point::new(row_idx as i32, col_idx as i32);
                let kind = CellKind::from_symbol(ch).ok_or(MazeError::InvalidCharacter {
                    row: row_idx,
                    column: col_idx,
                    character: ch,
                })?;
                match kind {
                    CellKind::Start => {
                        if start.is_some() {
                            return Err(MazeError::MultipleStartPoints);
                        }
                        start = Some(pos);
                    }
                    CellKind::End => ends.push(pos),
                    _ => {}
                }
                kinds.push(kind);
            }
            grid_rows.push(kinds);
        }

        let Some(start) = start else {
            return Err(MazeError::NoStartPoint);
        };
        if ends.is_empty() {
            return Err(MazeError::NoEndPoint);
        }

        Ok(Self {
            grid: Grid::from_rows(grid_rows),
            start,
            ends,
        })
    }

    /// The parsed grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The single start position.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Exit positions in row-major discovery order.
    pub fn ends(&self) -> &[Point] {
        &self.ends
    }
}

/// A parse-time maze validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A character outside the input vocabulary was found.
    InvalidCharacter {
        row: usize,
        column: usize,
        character: char,
    },
    /// More than one `^` in the input.
    MultipleStartPoints,
    /// No `^` anywhere in the input.
    NoStartPoint,
    /// No `E` anywhere in the input.
    NoEndPoint,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter {
                row,
                column,
                character,
            } => {
                write!(
                    f,
                    "maze contains invalid character \u{201c}{character}\u{201d} at ({row}, {column})"
                )
            }
            Self::MultipleStartPoints => write!(f, "maze contains more than one start point"),
            Self::NoStartPoint => write!(f, "maze has no start point"),
            Self::NoEndPoint => write!(f, "maze has no end point"),
        }
    }
}

impl std::error::Error for MazeError {}
