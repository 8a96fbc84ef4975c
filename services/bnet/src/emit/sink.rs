//! Output handle that mirrors every emitted line into the log stream

use crate::config::LoggingConfig;
use std::io::{self, Write};

pub const OUTPUT_TARGET: &str = "bnet::output";

/// Line-oriented writer for transcoder output.
///
/// Output lines go to the wrapped writer and, when mirroring is on, to
/// `tracing` under [`OUTPUT_TARGET`]. Comment lines are log-only.
pub struct OutputSink<W: Write> {
    out: W,
    mirror_output: bool,
    progress_comments: bool,
    lines_written: usize,
}

impl<W: Write> OutputSink<W> {
    pub fn new(out: W) -> Self {
        Self::with_logging(out, &LoggingConfig::default())
    }

    pub fn with_logging(out: W, logging: &LoggingConfig) -> Self {
        Self {
            out,
            mirror_output: logging.mirror_output,
            progress_comments: logging.progress_comments,
            lines_written: 0,
        }
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.lines_written += 1;
        if self.mirror_output {
            tracing::info!(target: OUTPUT_TARGET, "{}", text);
        }
        Ok(())
    }

    pub fn blank(&mut self) -> io::Result<()> {
        self.line("")
    }

    /// Log-only commentary, never part of the output format.
    pub fn comment(&self, text: &str) {
        if self.progress_comments {
            tracing::info!(target: OUTPUT_TARGET, "# {}", text);
        }
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
