//! Per-file orchestration: read, parse, solve, report.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use maze_core::Maze;
use maze_paths::{SearchResult, format_path, solve};

use crate::report::ResultSink;

/// Fixed step limits the report answers for, before the shortest-path line.
const STEP_LIMITS: [usize; 3] = [20, 150, 200];

/// Solve one maze file and write its report to the sink.
///
/// A missing or unreadable file is logged and skipped; a malformed maze
/// emits its diagnostic instead of a report. Only sink I/O errors propagate.
pub fn solve_file<W: Write>(path: &Path, sink: &mut ResultSink<W>) -> io::Result<()> {
    let dashes = "-".repeat(20);
    sink.line(&format!("{dashes} {} {dashes}", path.display()))?;

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            log::error!("File {} not found: {err}", path.display());
            sink.line("")?;
            return Ok(());
        }
    };
    report_maze(&text, sink)
}

/// Parse, solve and report one maze's text.
///
/// A limit of exactly the winning path length counts as not solved under
/// that limit.
fn report_maze<W: Write>(text: &str, sink: &mut ResultSink<W>) -> io::Result<()> {
    let rows: Vec<&str> = text.lines().collect();

    let maze = match Maze::parse(&rows) {
        Ok(maze) => maze,
        Err(err) => {
            log::error!("{err}");
            sink.line(&err.to_string())?;
            sink.line("")?;
            return Ok(());
        }
    };
    log::info!(
        "Start: {} Endings: {}",
        maze.start(),
        format_path(maze.ends())
    );

    sink.line("Given maze grid:")?;
    for row in maze.grid().render() {
        sink.line(&row)?;
    }

    let solution = solve(&maze);
    match solution
        .best()
        .map(|best| (&best.result, best.solved_grid.as_ref()))
    {
        Some((SearchResult::Reachable { path_length, path }, solved_grid)) => {
            for limit in STEP_LIMITS {
                if limit > *path_length {
                    sink.line(&format!("Was able to solve the maze under {limit} steps"))?;
                } else {
                    sink.line(&format!(
                        "Was not able to solve the maze under {limit} steps"
                    ))?;
                }
            }
            sink.line(&format!(
                "Shortest path took {path_length} steps. The path used: {}",
                format_path(path)
            ))?;
            if let Some(grid) = solved_grid {
                for row in grid {
                    sink.line(row)?;
                }
            }
        }
        _ => {
            log::info!("The maze is unsolvable");
            sink.line("The maze is unsolvable")?;
        }
    }
    sink.line("")?;
    Ok(())
}
