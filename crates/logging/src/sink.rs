//! crates/logging/src/sink.rs
//! Output boundary: the sink trait, the console default, and a capture buffer.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Destination for rendered log lines.
///
/// The sink is the only I/O boundary in the system. It receives the final
/// line, nothing else: failures have no channel back to the logger and are
/// the implementation's own responsibility. Substituting a sink (capture to
/// a buffer, forward elsewhere) requires no changes to the core.
pub trait Sink {
    /// Delivers one rendered line.
    fn write_line(&self, line: &str);
}

/// Shared handle passing one sink to a manager and every logger it builds.
pub type SharedSink = Arc<dyn Sink + Send + Sync>;

impl<F> Sink for F
where
    F: Fn(&str),
{
    /// Any `Fn(&str)` closure is usable as a sink directly.
    fn write_line(&self, line: &str) {
        self(line);
    }
}

/// Default sink: writes each line, newline-terminated, to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Creates the console sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn write_line(&self, line: &str) {
        let mut out = io::stdout().lock();
        // Stdout failures have no recovery path here; the line is dropped.
        let _ = writeln!(out, "{line}");
    }
}

/// Capturing sink that holds every line in memory.
///
/// Intended for tests and diagnostics: hand the manager an
/// `Arc<MemorySink>` and inspect [`lines`](Self::lines) afterwards.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty capture buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every captured line, in arrival order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Number of captured lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    /// Reports whether nothing has been captured yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and returns every captured line, clearing the buffer.
    pub fn drain(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|mut lines| lines.drain(..).collect())
            .unwrap_or_default()
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_owned());
        }
    }
}
