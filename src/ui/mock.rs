//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion, both per kind and as one ordered
//! transcript.
//!
//! # Example
//!
//! ```
//! use genesis::ui::{MockUI, UiEvent, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Starting");
//! ui.success("Done!");
//!
//! assert!(ui.messages().contains(&"Starting".to_string()));
//! assert_eq!(ui.transcript()[1], UiEvent::Success("Done!".to_string()));
//! ```

use super::UserInterface;

/// One captured UI interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Message(String),
    Success(String),
    Warning(String),
    Error(String),
    Header(String),
    Separator,
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    transcript: Vec<UiEvent>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Every interaction, in the order it happened.
    pub fn transcript(&self) -> &[UiEvent] {
        &self.transcript
    }

    /// Check if any message, success, warning or error contains `needle`.
    pub fn has_output(&self, needle: &str) -> bool {
        self.messages
            .iter()
            .chain(&self.successes)
            .chain(&self.warnings)
            .chain(&self.errors)
            .any(|m| m.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.transcript.push(UiEvent::Message(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.transcript.push(UiEvent::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.transcript.push(UiEvent::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.transcript.push(UiEvent::Error(msg.to_string()));
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.transcript.push(UiEvent::Header(title.to_string()));
    }

    fn separator(&mut self) {
        self.transcript.push(UiEvent::Separator);
    }
}
