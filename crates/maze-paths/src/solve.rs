//! Multi-goal selection: one search per exit, best exit wins.

use maze_core::{CellKind, Maze, Point};

use crate::astar::{Pathfinder, SearchResult};
use crate::neighbors::NeighborGraph;

/// The outcome of searching toward one exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitOutcome {
    /// The exit's position.
    pub end: Point,
    /// Reachable with a shortest path, or unreachable.
    pub result: SearchResult,
    /// The solved-grid rendering for this exit's own search, present only
    /// when reachable: visited cells as `x`, the path as `O`, with the
    /// start and this exit restored to `^`/`E`.
    pub solved_grid: Option<Vec<String>>,
}

/// Per-exit outcomes plus the winning exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// One outcome per exit, in discovery order (`E_0 … E_{N-1}`).
    pub exits: Vec<ExitOutcome>,
    best: Option<usize>,
}

impl Solution {
    /// Whether at least one exit is reachable.
    pub fn solved_any(&self) -> bool {
        self.best.is_some()
    }

    /// Discovery index of the winning exit, when any exit is reachable.
    pub fn best_index(&self) -> Option<usize> {
        self.best
    }

    /// The winning exit's outcome: the first-encountered reachable exit
    /// with the strictly smallest path length.
    pub fn best(&self) -> Option<&ExitOutcome> {
        self.best.map(|i| &self.exits[i])
    }
}

/// Search every exit of `maze` in discovery order and pick the winner.
///
/// Each exit gets a logically fresh search; later exits replace the current
/// best only on strict improvement, so equal-length ties go to the
/// earlier-discovered exit.
pub fn solve(maze: &Maze) -> Solution {
    let graph = NeighborGraph::build(maze.grid());
    let mut finder = Pathfinder::new(&graph);

    let mut exits = Vec::with_capacity(maze.ends().len());
    let mut best: Option<usize> = None;
    let mut best_len = usize::MAX;

    for (idx, &end) in maze.ends().iter().enumerate() {
        let result = finder.search(&graph, maze.start(), end);
        let solved_grid = match &result {
            SearchResult::Reachable { path_length, path } => {
                log::info!("Results for ending: E_{idx}");
                log::info!("Path length: {path_length}");
                log::info!("Taken path: {}", format_path(path));
                if *path_length < best_len {
                    if best.is_some() {
                        log::info!(
                            "Found new shortest path: E_{idx} with length: {path_length}"
                        );
                    } else {
                        log::info!("Found first path: E_{idx} with length: {path_length}");
                    }
                    best = Some(idx);
                    best_len = *path_length;
                }
                Some(render_solved(maze, finder.visited(), path, end))
            }
            SearchResult::Unreachable => {
                log::info!("Ending: E_{idx} is unsolvable");
                None
            }
        };
        exits.push(ExitOutcome {
            end,
            result,
            solved_grid,
        });
    }

    Solution { exits, best }
}

/// Format positions the way they appear in result and log lines:
/// `[(0, 1), (0, 2)]`.
pub fn format_path(path: &[Point]) -> String {
    let steps: Vec<String> = path.iter().map(Point::to_string).collect();
    format!("[{}]", steps.join(", "))
}

/// Overlay one search's annotations on the base grid.
///
/// Path wins over visited; the start and the searched exit are restored
/// last so the solved view still shows them. A different exit crossed by
/// the path renders `O`, one that was merely relaxed renders `x`.
fn render_solved(maze: &Maze, visited: &[Point], path: &[Point], end: Point) -> Vec<String> {
    let mut rows: Vec<Vec<char>> = maze
        .grid()
        .render()
        .iter()
        .map(|row| row.chars().collect())
        .collect();

    let mut put = |p: Point, kind: CellKind| {
        rows[p.row as usize][p.col as usize] = kind.symbol();
    };
    for &p in visited {
        put(p, CellKind::Visited);
    }
    for &p in path {
        put(p, CellKind::Path);
    }
    put(maze.start(), CellKind::Start);
    put(end, CellKind::End);

    rows.into_iter().map(|row| row.into_iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_reachable_exit() {
        let maze = Maze::parse(&["^E"]).unwrap();
        let solution = solve(&maze);
        assert!(solution.solved_any());
        assert_eq!(solution.best_index(), Some(0));
        assert_eq!(
            solution.best().unwrap().result,
            SearchResult::Reachable {
                path_length: 1,
                path: vec![Point::new(0, 1)],
            }
        );
    }

    #[test]
    fn no_exit_reachable() {
        let maze = Maze::parse(&["^#E"]).unwrap();
        let solution = solve(&maze);
        assert!(!solution.solved_any());
        assert_eq!(solution.best(), None);
        assert_eq!(solution.exits[0].result, SearchResult::Unreachable);
        assert_eq!(solution.exits[0].solved_grid, None);
    }

    #[test]
    fn tie_goes_to_earlier_discovered_exit() {
        // Both exits are one step from the start.
        let maze = Maze::parse(&["E^E"]).unwrap();
        let solution = solve(&maze);
        assert_eq!(solution.best_index(), Some(0));
        assert_eq!(solution.best().unwrap().end, Point::new(0, 0));
    }

    #[test]
    fn strict_improvement_replaces_best() {
        // E_0 is four steps away, E_1 one step.
        let maze = Maze::parse(&["E   ^E"]).unwrap();
        let solution = solve(&maze);
        assert_eq!(solution.best_index(), Some(1));
        assert_eq!(solution.best().unwrap().result.path_length(), Some(1));
    }

    #[test]
    fn unreachable_exit_does_not_block_later_winner() {
        let maze = Maze::parse(&["E#^ E"]).unwrap();
        let solution = solve(&maze);
        assert!(solution.solved_any());
        assert_eq!(solution.best_index(), Some(1));
    }

    #[test]
    fn solved_grid_shows_annotations_and_restored_markers() {
        let maze = Maze::parse(&["^E"]).unwrap();
        let solution = solve(&maze);
        let grid = solution.best().unwrap().solved_grid.clone().unwrap();
        // The exit is on the path but renders as E after restoration.
        assert_eq!(grid, vec!["^E".to_string()]);
    }

    #[test]
    fn solved_grid_marks_path_and_visited() {
        let maze = Maze::parse(&["^  ", "# #", "  E"]).unwrap();
        let solution = solve(&maze);
        let grid = solution.best().unwrap().solved_grid.clone().unwrap();
        assert_eq!(grid.len(), 3);
        assert!(grid[0].starts_with('^'));
        assert!(grid[2].ends_with('E'));
        let path_cells: usize = grid.iter().map(|r| r.matches('O').count()).sum();
        // Path length is 4; the final exit cell renders E, so 3 O cells.
        assert_eq!(path_cells, 3);
        // Walls are untouched by annotations.
        assert_eq!(&grid[1][0..1], "#");
        assert_eq!(&grid[1][2..3], "#");
    }

    #[test]
    fn winning_grid_reflects_only_that_search() {
        // E_1 wins; its solved grid must not carry E_0's annotations.
        // E_0 forces a long detour through the left arm, E_1 is adjacent.
        let maze = Maze::parse(&["E  ^E", "#### "]).unwrap();
        let solution = solve(&maze);
        assert_eq!(solution.best_index(), Some(1));
        let grid = solution.best().unwrap().solved_grid.clone().unwrap();
        // Left arm cells were never touched by E_1's search.
        assert_eq!(&grid[0][0..2], "E ");
    }

    #[test]
    fn format_path_matches_result_lines() {
        assert_eq!(
            format_path(&[Point::new(0, 1), Point::new(1, 1)]),
            "[(0, 1), (1, 1)]"
        );
        assert_eq!(format_path(&[]), "[]");
    }
}
