//! The result sink: an output stream plus an optional result file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Writes result lines to an output stream and, when configured, to a file.
///
/// The file is truncated when opened, then appended to line by line for the
/// rest of the run.
pub struct ResultSink<W: Write> {
    out: W,
    file: Option<File>,
}

impl ResultSink<io::Stdout> {
    /// Open the sink on stdout, truncating `result_file` when given.
    pub fn stdout(result_file: Option<&Path>) -> io::Result<Self> {
        let file = match result_file {
            Some(path) => {
                log::info!("Setting to print results to file: {}", path.display());
                if path.exists() {
                    log::info!("File {} already exists. Overwriting", path.display());
                }
                Some(File::create(path)?)
            }
            None => None,
        };
        Ok(Self {
            out: io::stdout(),
            file,
        })
    }
}

impl<W: Write> ResultSink<W> {
    /// A sink writing to `out` only, with no result file.
    pub fn with_output(out: W) -> Self {
        Self { out, file: None }
    }

    /// Emit one result line.
    pub fn line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        if let Some(file) = &mut self.file {
            writeln!(file, "{line}")?;
        }
        Ok(())
    }
}
