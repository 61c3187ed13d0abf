//! Console sink for operational output.

/// Target for console-observable pipeline output.
///
/// The pipeline describes *what* happened through these two methods;
/// implementations decide *where* it lands (terminal, test buffer, ...).
pub trait Console {
    /// Report normal progress.
    fn info(&mut self, msg: &str);

    /// Report a recoverable problem.
    fn warn(&mut self, msg: &str);
}

/// Terminal console: info to stdout, warnings to stderr.
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn info(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn warn(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }
}
