//! Geometry primitives: [`Point`].

use std::fmt;
use std::ops::{Add, Sub};

/// A 2D integer grid position. Row grows down, column grows right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a point shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours, in up, right, down, left order.
    ///
    /// This order is fixed: it decides which equal-cost path a search finds
    /// first, so it must stay stable for reproducible results.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            self.shift(-1, 0),
            self.shift(0, 1),
            self.shift(1, 0),
            self.shift(0, -1),
        ]
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let p = Point::new(2, 3);
        assert_eq!(p + Point::new(1, -1), Point::new(3, 2));
        assert_eq!(p - Point::new(2, 3), Point::new(0, 0));
        assert_eq!(p.shift(-1, 0), Point::new(1, 3));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut points = vec![Point::new(1, 0), Point::new(0, 5), Point::new(0, 1)];
        points.sort();
        assert_eq!(
            points,
            vec![Point::new(0, 1), Point::new(0, 5), Point::new(1, 0)]
        );
    }

    #[test]
    fn neighbors_order_up_right_down_left() {
        let p = Point::new(5, 5);
        assert_eq!(
            p.neighbors_4(),
            [
                Point::new(4, 5),
                Point::new(5, 6),
                Point::new(6, 5),
                Point::new(5, 4),
            ]
        );
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(3, 7).to_string(), "(3, 7)");
    }
}
