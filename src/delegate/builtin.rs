//! Delegates backed by the tools compiled into this crate.

use crate::config::ProjectContext;
use crate::error::Result;
use crate::integration::{IntegrationSuite, SuiteEvent};
use crate::patterns::PatternAnalyzer;
use crate::state::StateTracker;
use crate::ui::UserInterface;
use crate::validation::{GenesisValidator, RULE_WIDTH};

use super::{Delegate, DelegateKind, DelegateOutcome};

/// Exit code reported by a built-in tool that ran and failed.
const FAILURE_CODE: i32 = 1;

/// Prefix for failure lines that stay on stdout with the rest of a report.
const FAILURE_MARK: &str = "✗";

/// Build the built-in delegate for `kind`.
pub fn for_kind(kind: DelegateKind, ctx: ProjectContext) -> Box<dyn Delegate> {
    match kind {
        DelegateKind::Validate => Box::new(ValidateTool::new(ctx)),
        DelegateKind::State => Box::new(StateTool::new(ctx)),
        DelegateKind::Analyze => Box::new(AnalyzeTool::new(ctx)),
        DelegateKind::Test => Box::new(IntegrationTool::new(ctx)),
    }
}

fn print_lines(ui: &mut dyn UserInterface, text: &str) {
    for line in text.lines() {
        ui.message(line);
    }
}

fn outcome(passed: bool) -> DelegateOutcome {
    if passed {
        DelegateOutcome::Succeeded
    } else {
        DelegateOutcome::Failed {
            code: Some(FAILURE_CODE),
        }
    }
}

/// Validates the genesis document.
#[derive(Debug, Clone)]
pub struct ValidateTool {
    ctx: ProjectContext,
}

impl ValidateTool {
    pub fn new(ctx: ProjectContext) -> Self {
        Self { ctx }
    }
}

impl Delegate for ValidateTool {
    fn name(&self) -> &str {
        "builtin:validate"
    }

    fn run(&self, ui: &mut dyn UserInterface) -> Result<DelegateOutcome> {
        ui.message("Running Genesis Commitment validation...");
        ui.message("");

        let report = GenesisValidator::new(&self.ctx.genesis_file, self.ctx.git()).run();
        print_lines(ui, &report.to_string());

        Ok(outcome(report.passed()))
    }
}

/// Prints the state summary.
#[derive(Debug, Clone)]
pub struct StateTool {
    ctx: ProjectContext,
}

impl StateTool {
    pub fn new(ctx: ProjectContext) -> Self {
        Self { ctx }
    }
}

impl Delegate for StateTool {
    fn name(&self) -> &str {
        "builtin:state"
    }

    fn run(&self, ui: &mut dyn UserInterface) -> Result<DelegateOutcome> {
        match StateTracker::load(&self.ctx.state_file) {
            Ok(tracker) => {
                ui.message("");
                print_lines(ui, &tracker.summary());
                Ok(DelegateOutcome::Succeeded)
            }
            Err(e) => {
                ui.error(&format!("Error loading state: {}", e));
                Ok(outcome(false))
            }
        }
    }
}

/// Runs the recursive pattern analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeTool {
    ctx: ProjectContext,
}

impl AnalyzeTool {
    pub fn new(ctx: ProjectContext) -> Self {
        Self { ctx }
    }
}

impl Delegate for AnalyzeTool {
    fn name(&self) -> &str {
        "builtin:analyze"
    }

    fn run(&self, ui: &mut dyn UserInterface) -> Result<DelegateOutcome> {
        ui.message("Starting recursive pattern analysis...");
        ui.message("");

        let analyzer =
            PatternAnalyzer::new(self.ctx.git(), &self.ctx.genesis_file, self.ctx.max_depth);
        let report = analyzer.analyze_with(|phase| ui.message(phase));

        // Printed with the report on stdout.
        for warning in &report.warnings {
            ui.message(warning);
        }
        print_lines(ui, &report.to_string());

        Ok(DelegateOutcome::Succeeded)
    }
}

/// Runs the integration suite.
#[derive(Debug, Clone)]
pub struct IntegrationTool {
    ctx: ProjectContext,
}

impl IntegrationTool {
    pub fn new(ctx: ProjectContext) -> Self {
        Self { ctx }
    }
}

impl Delegate for IntegrationTool {
    fn name(&self) -> &str {
        "builtin:test"
    }

    fn run(&self, ui: &mut dyn UserInterface) -> Result<DelegateOutcome> {
        let rule = "=".repeat(RULE_WIDTH);

        ui.message(&rule);
        ui.message("GENESIS COMMITMENT INTEGRATION TEST");
        ui.message(&rule);
        ui.message("");

        let report = IntegrationSuite::new(self.ctx.clone()).run_with(|event| match event {
            SuiteEvent::Started(check) => ui.message(&format!("Testing {}...", check.subject())),
            SuiteEvent::Finished(result) => {
                if result.passed {
                    ui.success(&result.message);
                } else {
                    ui.message(&format!("{} {}", FAILURE_MARK, result.message));
                }
                ui.message("");
            }
        });

        ui.message(&rule);
        ui.message("TEST SUMMARY");
        ui.message(&rule);
        ui.message(&format!("Passed: {}/{}", report.passed(), report.total()));
        ui.message("");

        if report.all_passed() {
            ui.success("All tests passed! Genesis Commitment framework is operational.");
        } else {
            ui.message(&format!(
                "{} {} test(s) failed.",
                FAILURE_MARK,
                report.total() - report.passed()
            ));
        }

        Ok(outcome(report.all_passed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenesisConfig;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn context(temp: &TempDir) -> ProjectContext {
        ProjectContext::new(temp.path(), &GenesisConfig::default())
    }

    #[test]
    fn validate_without_document_fails_and_prints_report() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let outcome = ValidateTool::new(context(&temp)).run(&mut ui).unwrap();

        assert_eq!(outcome, DelegateOutcome::Failed { code: Some(1) });
        assert_eq!(ui.messages()[0], "Running Genesis Commitment validation...");
        assert!(ui.has_output("GENESIS COMMITMENT VALIDATION REPORT"));
        assert!(ui.has_output("✗ Errors:    1"));
    }

    #[test]
    fn state_prints_initial_summary() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let outcome = StateTool::new(context(&temp)).run(&mut ui).unwrap();

        assert!(outcome.is_success());
        assert!(ui.has_output("STATE SUMMARY"));
        assert!(ui.has_output("GENⱯ Mode: Active"));
    }

    #[test]
    fn state_with_corrupt_file_fails_without_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("state.json"), "not json").unwrap();
        let mut ui = MockUI::new();

        let outcome = StateTool::new(context(&temp)).run(&mut ui).unwrap();

        assert!(!outcome.is_success());
        assert!(ui.errors()[0].starts_with("Error loading state:"));
    }

    #[test]
    fn analyze_always_prints_report() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let outcome = AnalyzeTool::new(context(&temp)).run(&mut ui).unwrap();

        assert!(outcome.is_success());
        assert!(ui.messages().contains(&"Analyzing commit patterns...".to_string()));
        assert!(ui.has_output("RECURSIVE PATTERN ANALYSIS REPORT"));
        assert!(ui.has_output("Patterns Detected:"));
    }

    #[test]
    fn integration_counts_failures() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let outcome = IntegrationTool::new(context(&temp)).run(&mut ui).unwrap();

        assert!(!outcome.is_success());
        assert!(ui.has_output("Testing genesis configuration..."));
        assert!(ui.has_output("Testing pattern analyzer tool..."));
        assert!(ui
            .messages()
            .iter()
            .any(|m| m.starts_with("Passed: ") && m.ends_with("/7")));
    }

    #[test]
    fn integration_failures_stay_on_stdout() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        IntegrationTool::new(context(&temp)).run(&mut ui).unwrap();

        assert!(ui.errors().is_empty());
        assert!(ui
            .messages()
            .iter()
            .any(|m| m.starts_with("✗ Genesis configuration test failed")));
        assert!(ui
            .messages()
            .iter()
            .any(|m| m.starts_with("✗ ") && m.ends_with("test(s) failed.")));
    }

    #[test]
    fn analysis_errors_stay_on_stdout() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        AnalyzeTool::new(context(&temp)).run(&mut ui).unwrap();

        assert!(ui.warnings().is_empty());
        assert!(ui.errors().is_empty());
    }
}
