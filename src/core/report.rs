//! Status reporting as an injected collaborator.
//!
//! The engine narrates the game (rolls, purchases, liquidations,
//! bankruptcies) as human-readable lines pushed into a [`StatusSink`].
//! Nothing about correctness depends on what the sink does with them.

use std::cell::RefCell;
use std::rc::Rc;

/// Receiver of human-readable status lines.
pub trait StatusSink {
    /// Receive one status line.
    fn status(&mut self, line: &str);
}

/// Sink that discards every line.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl StatusSink for NullSink {
    fn status(&mut self, _line: &str) {}
}

/// Sink that prints each line to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl StatusSink for ConsoleSink {
    fn status(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Sink that records every line for later inspection.
///
/// Clones share the same buffer, so a test can keep one handle and
/// hand the other to the game:
///
/// ```
/// use tycoon_engine::core::{RecordingSink, StatusSink};
///
/// let sink = RecordingSink::new();
/// let mut handle = sink.clone();
/// handle.status("hello");
/// assert!(sink.contains("hello"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Whether any recorded line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|l| l.contains(needle))
    }
}

impl StatusSink for RecordingSink {
    fn status(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sink_discards() {
        let mut sink = NullSink;
        sink.status("gone");
    }

    #[test]
    fn test_recording_sink_shares_buffer() {
        let sink = RecordingSink::new();
        let mut writer = sink.clone();

        writer.status("first");
        writer.status("second");

        assert_eq!(sink.lines(), vec!["first", "second"]);
        assert!(sink.contains("sec"));
        assert!(!sink.contains("third"));
    }
}
