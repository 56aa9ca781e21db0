//! **maze-paths** — pathfinding over parsed mazes.
//!
//! This crate provides the search half of the maze solver:
//!
//! - **Neighbor graph** — 4-directional adjacency excluding walls, built
//!   once per maze ([`NeighborGraph`])
//! - **A\*** shortest-path search with deterministic tie-breaking
//!   ([`Pathfinder`])
//! - **Multi-goal selection** — one search per exit, best exit wins
//!   ([`solve`])
//!
//! [`Pathfinder`] owns and reuses its internal node arena so that repeated
//! per-exit searches on the same maze incur no allocations after the first.

mod astar;
mod distance;
mod neighbors;
mod solve;

pub use astar::{Pathfinder, SearchResult};
pub use distance::manhattan;
pub use neighbors::NeighborGraph;
pub use solve::{ExitOutcome, Solution, format_path, solve};
