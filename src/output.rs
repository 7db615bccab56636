//! Line-oriented output sinks.
//!
//! Every demo reports through a [`LineSink`] instead of printing directly,
//! so the same code drives the console binary and the in-memory sink used
//! by tests.

use std::cell::RefCell;
use std::rc::Rc;

/// Something that accepts whole lines of text.
pub trait LineSink {
    /// Write a single line. The sink supplies the line terminator.
    fn write_line(&self, line: &str);
}

impl<S: LineSink + ?Sized> LineSink for &S {
    fn write_line(&self, line: &str) {
        (**self).write_line(line);
    }
}

impl<S: LineSink + ?Sized> LineSink for Rc<S> {
    fn write_line(&self, line: &str) {
        (**self).write_line(line);
    }
}

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}

/// Records lines in memory (for testing and for capturing demo output).
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: RefCell<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// All lines joined with `\n`.
    pub fn contents(&self) -> String {
        self.lines.borrow().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl LineSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_lines_in_order() {
        let sink = MemorySink::new();
        sink.write_line("first");
        sink.write_line("second");

        assert_eq!(sink.lines(), vec!["first", "second"]);
        assert_eq!(sink.contents(), "first\nsecond");
    }

    #[test]
    fn memory_sink_clear_empties_buffer() {
        let sink = MemorySink::new();
        sink.write_line("gone");
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn shared_references_forward_to_inner_sink() {
        let sink = Rc::new(MemorySink::new());
        let by_rc: Rc<MemorySink> = Rc::clone(&sink);
        by_rc.write_line("via rc");
        (&*sink).write_line("via ref");

        assert_eq!(sink.lines(), vec!["via rc", "via ref"]);
    }
}
