//! Command dispatching.
//!
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing an [`Action`] to its delegates

use crate::delegate::{DelegateKind, DelegateSet};
use crate::error::Result;
use crate::ui::UserInterface;

use super::action::Action;
use super::usage::usage_text;

/// Title of the boxed header printed by `status`.
pub const STATUS_TITLE: &str = "GENESIS COMMITMENT STATUS";

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// The line printed before a delegate runs.
pub fn banner(kind: DelegateKind) -> &'static str {
    match kind {
        DelegateKind::Validate => "🔍 Running Genesis validation...",
        DelegateKind::State => "📊 Checking state...",
        DelegateKind::Analyze => "🔬 Running pattern analysis...",
        DelegateKind::Test => "🧪 Running integration tests...",
    }
}

/// Routes actions to delegates.
#[derive(Debug)]
pub struct CommandDispatcher {
    delegates: DelegateSet,
}

impl CommandDispatcher {
    pub fn new(delegates: DelegateSet) -> Self {
        Self { delegates }
    }

    /// Dispatch and execute an action.
    ///
    /// Delegate outcomes are logged and otherwise ignored, so every action
    /// except [`Action::Unknown`] succeeds unless a delegate cannot be
    /// started at all. That error aborts the run immediately.
    pub fn dispatch(&self, action: &Action, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!("Dispatching {:?}", action);

        match action {
            Action::Status => self.status(ui)?,
            Action::Help => show_usage(ui),
            Action::Unknown(token) => {
                ui.message(&format!("Unknown command: {}", token));
                show_usage(ui);
                return Ok(CommandResult::failure(1));
            }
            single => {
                if let Some(kind) = single.delegate() {
                    self.run_delegate(kind, ui)?;
                }
            }
        }

        Ok(CommandResult::success())
    }

    fn status(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.show_header(STATUS_TITLE);
        self.run_delegate(DelegateKind::Validate, ui)?;
        ui.separator();
        self.run_delegate(DelegateKind::State, ui)?;
        ui.separator();
        self.run_delegate(DelegateKind::Analyze, ui)
    }

    fn run_delegate(&self, kind: DelegateKind, ui: &mut dyn UserInterface) -> Result<()> {
        ui.message(banner(kind));

        let delegate = self.delegates.get(kind);
        let outcome = delegate.run(ui)?;
        if outcome.is_success() {
            tracing::debug!("{} delegate '{}' succeeded", kind, delegate.name());
        } else {
            tracing::info!(
                "{} delegate '{}' finished with {:?}",
                kind,
                delegate.name(),
                outcome
            );
        }
        Ok(())
    }
}

fn show_usage(ui: &mut dyn UserInterface) {
    for line in usage_text().lines() {
        ui.message(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delegate::{Delegate, DelegateOutcome};
    use crate::error::GenesisError;
    use crate::ui::{MockUI, UiEvent};
    use std::path::PathBuf;

    /// Prints a marker line and reports a fixed outcome.
    struct FakeDelegate {
        name: &'static str,
        outcome: Option<DelegateOutcome>,
    }

    impl Delegate for FakeDelegate {
        fn name(&self) -> &str {
            self.name
        }

        fn run(&self, ui: &mut dyn UserInterface) -> Result<DelegateOutcome> {
            ui.message(&format!("<{}>", self.name));
            self.outcome.ok_or_else(|| GenesisError::DelegateSpawn {
                delegate: self.name.to_string(),
                program: PathBuf::from(self.name),
                message: "No such file or directory".to_string(),
            })
        }
    }

    fn fake(name: &'static str, outcome: Option<DelegateOutcome>) -> Box<dyn Delegate> {
        Box::new(FakeDelegate { name, outcome })
    }

    fn dispatcher_with(state: Option<DelegateOutcome>) -> CommandDispatcher {
        let ok = Some(DelegateOutcome::Succeeded);
        CommandDispatcher::new(DelegateSet::new(
            fake("validate", ok),
            fake("state", state),
            fake("analyze", ok),
            fake("test", ok),
        ))
    }

    fn dispatcher() -> CommandDispatcher {
        dispatcher_with(Some(DelegateOutcome::Succeeded))
    }

    fn run(action: Action) -> (CommandResult, MockUI) {
        let mut ui = MockUI::new();
        let result = dispatcher().dispatch(&action, &mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn single_actions_print_banner_then_delegate() {
        let cases = [
            (Action::Validate, DelegateKind::Validate, "<validate>"),
            (Action::State, DelegateKind::State, "<state>"),
            (Action::Analyze, DelegateKind::Analyze, "<analyze>"),
            (Action::Test, DelegateKind::Test, "<test>"),
        ];

        for (action, kind, marker) in cases {
            let (result, ui) = run(action);
            assert_eq!(result, CommandResult::success());
            assert_eq!(ui.messages(), &[banner(kind).to_string(), marker.to_string()]);
        }
    }

    #[test]
    fn status_runs_three_delegates_in_order() {
        let (result, ui) = run(Action::Status);

        assert_eq!(result.exit_code, 0);
        assert_eq!(
            ui.transcript(),
            &[
                UiEvent::Header(STATUS_TITLE.to_string()),
                UiEvent::Message(banner(DelegateKind::Validate).to_string()),
                UiEvent::Message("<validate>".to_string()),
                UiEvent::Separator,
                UiEvent::Message(banner(DelegateKind::State).to_string()),
                UiEvent::Message("<state>".to_string()),
                UiEvent::Separator,
                UiEvent::Message(banner(DelegateKind::Analyze).to_string()),
                UiEvent::Message("<analyze>".to_string()),
            ]
        );
    }

    #[test]
    fn status_skips_integration_tests() {
        let (_, ui) = run(Action::Status);
        assert!(!ui.has_output("<test>"));
        assert!(!ui.has_output(banner(DelegateKind::Test)));
    }

    #[test]
    fn delegate_failure_does_not_change_exit_code() {
        let mut ui = MockUI::new();
        let result = dispatcher_with(Some(DelegateOutcome::Failed { code: Some(2) }))
            .dispatch(&Action::Status, &mut ui)
            .unwrap();

        assert_eq!(result, CommandResult::success());
        assert!(ui.has_output("<analyze>"));
    }

    #[test]
    fn spawn_failure_aborts_status() {
        let mut ui = MockUI::new();
        let err = dispatcher_with(None)
            .dispatch(&Action::Status, &mut ui)
            .unwrap_err();

        assert!(matches!(err, GenesisError::DelegateSpawn { .. }));
        assert!(ui.has_output("<state>"));
        assert!(!ui.has_output("<analyze>"));
    }

    #[test]
    fn help_prints_usage() {
        let (result, ui) = run(Action::Help);
        let expected: Vec<String> = usage_text().lines().map(String::from).collect();

        assert_eq!(result, CommandResult::success());
        assert_eq!(ui.messages(), expected.as_slice());
    }

    #[test]
    fn help_aliases_print_identical_output() {
        let outputs: Vec<Vec<String>> = [None, Some("help"), Some("--help"), Some("-h")]
            .into_iter()
            .map(|token| run(Action::parse(token)).1.messages().to_vec())
            .collect();

        assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn unknown_command_prints_usage_and_fails() {
        let (result, ui) = run(Action::Unknown("bogus".to_string()));

        assert_eq!(result, CommandResult::failure(1));
        assert_eq!(ui.messages()[0], "Unknown command: bogus");
        assert!(ui.has_output("Usage: genesis"));
        assert!(!ui.has_output("<validate>"));
    }
}
