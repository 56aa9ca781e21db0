//! Command-line interface.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

/// Solve character-grid mazes with A* and report the shortest exit.
///
/// Maze symbols: `#` wall, `^` start, `E` exit, space walkable. Exits are
/// named `E_0`, `E_1`, … in discovery order and each is checked for
/// solvability; the shortest reachable one wins.
#[derive(Parser, Debug)]
#[command(name = "maze-solver", version)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .multiple(true)
        .args(["file", "directory"])
))]
pub struct Cli {
    /// Maze file to solve.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Directory whose root-level .txt files are all solved.
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Log verbosity written to the log file.
    #[arg(short = 'l', long, value_enum, default_value_t = LogLevel::Error)]
    pub log_level: LogLevel,

    /// Log file, truncated on startup.
    #[arg(long, default_value = "maze-solver.log")]
    pub log_file: PathBuf,

    /// Also write result lines to this file (truncated when it exists).
    #[arg(long)]
    pub result_file: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Info,
    Debug,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
        }
    }
}
