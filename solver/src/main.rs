//! maze-solver — find the shortest way out of character-grid mazes.

mod cli;
mod report;
mod run;

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use cli::Cli;
use report::ResultSink;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let log_file = File::create(&args.log_file)
        .with_context(|| format!("creating log file {}", args.log_file.display()))?;
    env_logger::Builder::new()
        .filter_level(args.log_level.to_filter())
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let files = collect_maze_files(&args)?;
    let mut sink = ResultSink::stdout(args.result_file.as_deref())
        .context("opening result file")?;

    for path in &files {
        log::info!("Given maze file: {}", path.display());
        run::solve_file(path, &mut sink).context("writing results")?;
    }
    Ok(())
}

/// Assemble the list of maze files to solve: the explicit file first, then
/// the directory's root-level `.txt` files sorted by name.
fn collect_maze_files(args: &Cli) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if let Some(file) = &args.file {
        log::info!("Given maze file name: {}", file.display());
        files.push(file.clone());
    }

    if let Some(dir) = &args.directory {
        log::info!("Given maze directory name: {}", dir.display());
        let mut found = Vec::new();
        for entry in fs::read_dir(dir)
            .with_context(|| format!("reading directory {}", dir.display()))?
        {
            let path = entry?.path();
            let is_txt = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
            if path.is_file() && is_txt {
                log::info!("Found file {}", path.display());
                found.push(path);
            }
        }
        found.sort();
        files.extend(found);
    }

    Ok(files)
}
