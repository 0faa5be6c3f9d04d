//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{NamnsdagTheme, UserInterface};

/// Terminal UI implementation.
///
/// Names go to standard output; status, warnings and errors go to standard
/// error so the names line can be piped.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: NamnsdagTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(theme: NamnsdagTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn status(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_status(msg)).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn theme(&self) -> &NamnsdagTheme {
        &self.theme
    }
}
