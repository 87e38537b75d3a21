use std::{cell::RefCell, rc::Rc};

/// How much the interpreter narrates about itself on the debug sink.
///
/// Each level includes everything the levels before it report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, clap::ValueEnum)]
pub enum Verbosity {
    /// Nothing.
    #[default]
    Silent,
    /// Command module loads.
    Terse,
    /// Registered procedures and captured definitions.
    Chatty,
    /// Tokenizer results and how long they took.
    Verbose,
    /// Dumps of every token buffer before it runs.
    Logorrheic,
}

/// A line-oriented text sink.
///
/// The interpreter writes everything a user should see through one of these,
/// and its own narration through another, so hosts decide where text goes.
pub trait OutputWriter {
    /// Writes one line of text.
    fn write_line(&mut self, line: &str);
}

/// Writes lines to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardOutput;

impl OutputWriter for StandardOutput {
    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Writes lines to the process's standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardError;

impl OutputWriter for StandardError {
    fn write_line(&mut self, line: &str) {
        eprintln!("{line}");
    }
}

/// Throws every line away.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl OutputWriter for Discard {
    fn write_line(&mut self, _line: &str) {}
}

/// Collects lines in memory.
///
/// Clones share the same storage, so one clone can be handed to the
/// interpreter while another reads what was written.
///
/// # Example
/// ```
/// use logoterp::interpreter::output::{OutputWriter, SharedBuffer};
///
/// let buffer = SharedBuffer::default();
/// let mut writer = buffer.clone();
/// writer.write_line("hello");
///
/// assert_eq!(buffer.lines(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct SharedBuffer {
    lines: Rc<RefCell<Vec<String>>>,
}

impl SharedBuffer {
    /// Returns a copy of every line written so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Removes and returns every line written so far.
    #[must_use]
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }
}

impl OutputWriter for SharedBuffer {
    fn write_line(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}
