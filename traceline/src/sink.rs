//! Log sinks: where serialized entries are written.
//!
//! A sink receives one serialized JSON entry per call and must write it as
//! a single line, immediately flushed. Concurrent callers may interleave
//! *lines*, never bytes within a line: each implementation issues the line
//! plus terminating newline as one write under a lock.

use std::io::{self, Write};
use std::sync::Mutex;

/// Destination for serialized log lines.
pub trait Sink: Send + Sync {
    /// Write one serialized entry (without trailing newline) as a single
    /// flushed line.
    ///
    /// Write failures must not propagate; a logging failure never takes
    /// the process down.
    fn write_line(&self, line: &str);
}

/// Sink writing to the process's standard output stream.
///
/// Holds the stdout lock for the duration of one line write, so lines from
/// concurrent threads are emitted intact and ordering with other process
/// output is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) {
        let mut buffer = String::with_capacity(line.len() + 1);
        buffer.push_str(line);
        buffer.push('\n');

        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(buffer.as_bytes());
        let _ = stdout.flush();
    }
}

/// Sink capturing lines in memory, for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured lines, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// True when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_string());
    }
}
