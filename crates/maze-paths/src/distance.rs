use maze_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent as an A* heuristic here: every edge has
/// uniform cost 1 and moves are axis-aligned, so it never overestimates
/// the true remaining distance.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
