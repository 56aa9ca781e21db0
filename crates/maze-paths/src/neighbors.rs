//! Precomputed 4-directional adjacency for a parsed grid.

use maze_core::{Grid, Point};

/// The walkable-neighbor lists of every cell in a grid.
///
/// Built once per maze after parsing and read-only during search. Each cell
/// has 0–4 neighbors in fixed up, right, down, left order; walls and
/// positions outside a row's bounds are excluded. The fixed order decides
/// which equal-cost path a search finds first, so search outcomes stay
/// reproducible.
pub struct NeighborGraph {
    row_starts: Vec<usize>,
    row_lens: Vec<usize>,
    positions: Vec<Point>,
    adjacency: Vec<Vec<Point>>,
}

impl NeighborGraph {
    /// Build the adjacency lists for every cell of `grid`.
    pub fn build(grid: &Grid) -> Self {
        let height = grid.height();
        let mut row_starts = Vec::with_capacity(height);
        let mut row_lens = Vec::with_capacity(height);
        let mut total = 0;
        for row in 0..height {
            row_starts.push(total);
            let len = grid.row_len(row);
            row_lens.push(len);
            total += len;
        }

        let mut positions = Vec::with_capacity(total);
        let mut adjacency = Vec::with_capacity(total);
        for (pos, _) in grid.iter() {
            let mut neighbors = Vec::new();
            for candidate in pos.neighbors_4() {
                match grid.at(candidate) {
                    Some(kind) if kind.passable() => neighbors.push(candidate),
                    _ => {}
                }
            }
            positions.push(pos);
            adjacency.push(neighbors);
        }

        Self {
            row_starts,
            row_lens,
            positions,
            adjacency,
        }
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the grid had no cells at all.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Convert a point to a flat cell index. Returns `None` if out of
    /// the grid's (possibly ragged) bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.row < 0 || p.col < 0 {
            return None;
        }
        let row = p.row as usize;
        let col = p.col as usize;
        if row >= self.row_lens.len() || col >= self.row_lens[row] {
            return None;
        }
        Some(self.row_starts[row] + col)
    }

    /// Convert a flat cell index back to a point.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.positions[idx]
    }

    /// The walkable neighbors of `p`, or an empty slice out of bounds.
    pub fn neighbors(&self, p: Point) -> &[Point] {
        match self.idx(p) {
            Some(i) => &self.adjacency[i],
            None => &[],
        }
    }
}
