//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, GenesisTheme, UserInterface};

/// Terminal UI implementation.
///
/// Regular output goes to stdout; warnings and errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: GenesisTheme,
}

impl TerminalUI {
    /// Create a new terminal UI, styled unless colors are disabled.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            GenesisTheme::new()
        } else {
            GenesisTheme::plain()
        };

        Self::with_theme(theme)
    }

    pub fn with_theme(theme: GenesisTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
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

    fn show_header(&mut self, title: &str) {
        for line in self.theme.format_header(title) {
            writeln!(self.out, "{}", line).ok();
        }
    }

    fn separator(&mut self) {
        writeln!(self.out, "{}", self.theme.format_separator()).ok();
    }
}
