//! A* shortest-path search with deterministic tie-breaking.

use std::collections::BinaryHeap;

use maze_core::Point;

use crate::distance::manhattan;
use crate::neighbors::NeighborGraph;

/// Outcome of one search toward one exit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchResult {
    /// No walkable route from start to this exit.
    Unreachable,
    /// A shortest route exists.
    Reachable {
        /// Number of edges traversed, equal to `path.len()`.
        path_length: usize,
        /// Positions from the cell after start to the exit inclusive.
        path: Vec<Point>,
    },
}

impl SearchResult {
    /// Whether the exit was reached.
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable { .. })
    }

    /// The path length when reachable.
    pub fn path_length(&self) -> Option<usize> {
        match self {
            Self::Reachable { path_length, .. } => Some(*path_length),
            Self::Unreachable => None,
        }
    }
}

/// Sentinel g-value for cells with no known route yet.
const UNREACHABLE_G: i32 = i32::MAX;

#[derive(Clone)]
struct Node {
    g: i32,
    f: i32,
    parent: usize,
    generation: u32,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Entry in the open set, ordered by `f` with an insertion sequence number
/// as the tie-break so equal-cost pops are deterministic.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenEntry {
    idx: usize,
    f: i32,
    seq: u64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest f first,
        // and among equal f the earliest-inserted entry.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Reusable A* search state for one maze.
///
/// The node arena is sized for the maze's cell count and lazily invalidated
/// between searches with a generation counter, so running one search per
/// exit reuses the same allocation.
pub struct Pathfinder {
    nodes: Vec<Node>,
    generation: u32,
    seq: u64,
    visited: Vec<Point>,
}

impl Pathfinder {
    /// Create a pathfinder for a maze with `graph`'s cell count.
    pub fn new(graph: &NeighborGraph) -> Self {
        Self {
            nodes: vec![Node::default(); graph.len()],
            generation: 0,
            seq: 0,
            visited: Vec::new(),
        }
    }

    /// Positions relaxed during the most recent search, in discovery order.
    ///
    /// These are the cells rendered as `Visited` in a solved-grid view. The
    /// start cell is never included.
    pub fn visited(&self) -> &[Point] {
        &self.visited
    }

    /// Compute the minimum-edge-count path from `start` to `goal`, or
    /// report unreachability.
    ///
    /// The returned path excludes `start` and includes `goal`; every edge
    /// has uniform cost 1 and the heuristic is Manhattan distance.
    pub fn search(&mut self, graph: &NeighborGraph, start: Point, goal: Point) -> SearchResult {
        self.visited.clear();

        let (Some(start_idx), Some(goal_idx)) = (graph.idx(start), graph.idx(goal)) else {
            return SearchResult::Unreachable;
        };

        if start_idx == goal_idx {
            return SearchResult::Reachable {
                path_length: 0,
                path: Vec::new(),
            };
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = manhattan(start, goal);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        self.seq += 1;
        open.push(OpenEntry {
            idx: start_idx,
            f: self.nodes[start_idx].f,
            seq: self.seq,
        });

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries (lazy deletion).
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_point = graph.point(ci);

            for &np in graph.neighbors(current_point) {
                let Some(ni) = graph.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE_G;
                    n.open = false;
                }

                n.g = tentative_g;
                n.f = tentative_g + manhattan(np, goal);
                n.parent = ci;

                // A live open-set member keeps its queued priority; only
                // cells without a live entry get a fresh push.
                if !n.open {
                    n.open = true;
                    let f = n.f;
                    self.seq += 1;
                    open.push(OpenEntry {
                        idx: ni,
                        f,
                        seq: self.seq,
                    });
                    self.visited.push(np);
                }
            }
        };

        if !found {
            return SearchResult::Unreachable;
        }

        log::debug!("goal {goal} reached, reconstructing path");

        // Walk parents backward from the goal; the start (parent sentinel)
        // is excluded from the path.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX && ci != start_idx {
            path.push(graph.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();

        SearchResult::Reachable {
            path_length: path.len(),
            path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Maze;

    fn search(rows: &[&str]) -> SearchResult {
        let maze = Maze::parse(rows).unwrap();
        let graph = NeighborGraph::build(maze.grid());
        let mut finder = Pathfinder::new(&graph);
        finder.search(&graph, maze.start(), maze.ends()[0])
    }

    #[test]
    fn adjacent_exit() {
        assert_eq!(
            search(&["^E"]),
            SearchResult::Reachable {
                path_length: 1,
                path: vec![Point::new(0, 1)],
            }
        );
    }

    #[test]
    fn wall_blocks_only_route() {
        assert_eq!(search(&["^#E"]), SearchResult::Unreachable);
    }

    #[test]
    fn open_field_is_manhattan_optimal() {
        let result = search(&["^    ", "     ", "    E"]);
        assert_eq!(result.path_length(), Some(6));
    }

    #[test]
    fn walls_never_beat_manhattan() {
        let result = search(&["^ # E", "  #  ", "     "]);
        let len = result.path_length().unwrap();
        assert!(len >= manhattan(Point::new(0, 0), Point::new(0, 4)) as usize);
        assert_eq!(len, 8);
    }

    #[test]
    fn path_is_a_walk_of_mutual_neighbors() {
        let maze = Maze::parse(&["^  #E", " # # ", "     "]).unwrap();
        let graph = NeighborGraph::build(maze.grid());
        let mut finder = Pathfinder::new(&graph);
        let SearchResult::Reachable { path, .. } =
            finder.search(&graph, maze.start(), maze.ends()[0])
        else {
            panic!("expected a reachable exit");
        };
        let mut prev = maze.start();
        for &step in &path {
            assert!(graph.neighbors(prev).contains(&step));
            assert!(graph.neighbors(step).contains(&prev));
            assert!(maze.grid().at(step).unwrap().passable());
            prev = step;
        }
        assert_eq!(prev, maze.ends()[0]);
    }

    #[test]
    fn rerun_is_deterministic() {
        let maze = Maze::parse(&["^   ", "    ", "   E"]).unwrap();
        let graph = NeighborGraph::build(maze.grid());
        let mut finder = Pathfinder::new(&graph);
        let first = finder.search(&graph, maze.start(), maze.ends()[0]);
        let second = finder.search(&graph, maze.start(), maze.ends()[0]);
        assert_eq!(first, second);
    }

    #[test]
    fn equal_cost_tie_prefers_earlier_insertion() {
        // Both routes around the wall cost the same; the up-first neighbor
        // order makes the upper route win, every time.
        let maze = Maze::parse(&["   ", "^#E", "   "]).unwrap();
        let graph = NeighborGraph::build(maze.grid());
        let mut finder = Pathfinder::new(&graph);
        let SearchResult::Reachable { path, .. } =
            finder.search(&graph, maze.start(), maze.ends()[0])
        else {
            panic!("expected a reachable exit");
        };
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
            ]
        );
    }

    #[test]
    fn visited_excludes_start_and_resets_per_search() {
        let maze = Maze::parse(&["^E"]).unwrap();
        let graph = NeighborGraph::build(maze.grid());
        let mut finder = Pathfinder::new(&graph);
        finder.search(&graph, maze.start(), maze.ends()[0]);
        assert!(!finder.visited().contains(&maze.start()));
        let before = finder.visited().len();
        finder.search(&graph, maze.start(), maze.ends()[0]);
        assert_eq!(finder.visited().len(), before);
    }

    #[test]
    fn unreachable_pocket() {
        assert_eq!(search(&["^ #E#", "  ###", "#####"]), SearchResult::Unreachable);
    }
}
