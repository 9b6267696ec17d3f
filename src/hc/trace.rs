//! Append-only progress sinks.

use std::io::Write;
use tracing::warn;

/// Receives human-readable progress lines from a search run.
///
/// Sinks are observational: whatever a sink does, the search makes the
/// same decisions.
pub trait TraceSink {
    /// Whether lines should be produced at all.
    ///
    /// Returning `false` lets the runner skip formatting.
    fn enabled(&self) -> bool {
        true
    }

    /// Appends one line (without trailing newline).
    fn line(&mut self, line: &str);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn enabled(&self) -> bool {
        false
    }

    fn line(&mut self, _line: &str) {}
}

impl TraceSink for Vec<String> {
    fn line(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

/// Writes each line to an [`io::Write`](std::io::Write) target.
///
/// The first write error is logged and the sink goes quiet; the error
/// never reaches the search.
#[derive(Debug)]
pub struct WriteSink<W: Write> {
    writer: W,
    failed: bool,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    /// Whether a write has failed.
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for WriteSink<W> {
    fn enabled(&self) -> bool {
        !self.failed
    }

    fn line(&mut self, line: &str) {
        if self.failed {
            return;
        }
        if let Err(err) = writeln!(self.writer, "{line}") {
            warn!(error = %err, "trace sink write failed, dropping further lines");
            self.failed = true;
        }
    }
}
