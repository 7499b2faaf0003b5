//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for writing to the real terminal
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use genesis::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("STATUS");
//! ui.message("hello");
//! assert_eq!(ui.messages(), &["hello".to_string()]);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::{MockUI, UiEvent};
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, GenesisTheme};

/// Trait for user interface output.
///
/// This trait allows capturing the dispatcher's output in tests.
pub trait UserInterface {
    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show the boxed header.
    fn show_header(&mut self, title: &str);

    /// Show a separator line.
    fn separator(&mut self);
}
