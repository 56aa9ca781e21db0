//! A possibly-ragged grid of cell kinds.

use crate::cell::CellKind;
use crate::geom::Point;

/// A matrix of [`CellKind`] values, one row per input text row.
///
/// Rows may have differing lengths; lookups outside a row's bounds are
/// treated as absent, not erroneous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<CellKind>>,
}

impl Grid {
    /// Build a grid from parsed rows.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the given row, or 0 for a row outside the grid.
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// The cell kind at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<CellKind> {
        if p.row < 0 || p.col < 0 {
            return None;
        }
        self.rows
            .get(p.row as usize)
            .and_then(|row| row.get(p.col as usize))
            .copied()
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &kind)| (Point::new(r as i32, c as i32), kind))
        })
    }

    /// Render the grid as one string of symbols per row.
    pub fn render(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|kind| kind.symbol()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ragged() -> Grid {
        Grid::from_rows(vec![
            vec![CellKind::Wall, CellKind::Open, CellKind::End],
            vec![CellKind::Start],
        ])
    }

    #[test]
    fn at_within_bounds() {
        let g = ragged();
        assert_eq!(g.at(Point::new(0, 2)), Some(CellKind::End));
        assert_eq!(g.at(Point::new(1, 0)), Some(CellKind::Start));
    }

    #[test]
    fn at_outside_row_bounds_is_absent() {
        let g = ragged();
        assert_eq!(g.at(Point::new(1, 1)), None);
        assert_eq!(g.at(Point::new(2, 0)), None);
        assert_eq!(g.at(Point::new(-1, 0)), None);
        assert_eq!(g.at(Point::new(0, -1)), None);
    }

    #[test]
    fn iter_is_row_major() {
        let g = ragged();
        let points: Vec<Point> = g.iter().map(|(p, _)| p).collect();
        assert_eq!(
            points,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 0),
            ]
        );
    }

    #[test]
    fn render_keeps_ragged_shape() {
        let g = ragged();
        assert_eq!(g.render(), vec!["# E".to_string(), "^".to_string()]);
    }
}
