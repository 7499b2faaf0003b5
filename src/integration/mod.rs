//! Integration checks for a Genesis Commitment repository.
//!
//! The suite checks the data files, the documentation, the git history,
//! and that each built-in tool produces its report. Tools run in-process.

use anyhow::{bail, ensure, Context};
use serde_json::Value;
use std::fs;

use crate::config::ProjectContext;
use crate::patterns::PatternAnalyzer;
use crate::state::{StateTracker, TOTAL_COMMITMENTS};
use crate::validation::{load_genesis_document, GenesisValidator, REQUIRED_COMMITMENTS};

/// Expected value of the genesis document's `mode` field.
pub const GENESIS_MODE: &str = "GENⱯ";

/// Documents every framework repository must carry.
pub const REQUIRED_DOCS: [&str; 3] = ["README.md", "GENESIS.md", "OWNERSHIP.md"];

/// Minimum history length for the git check.
pub const MIN_COMMITS: usize = 3;

/// The individual checks, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    GenesisConfig,
    StateTracking,
    Documentation,
    GitIntegration,
    ValidationTool,
    StateTrackerTool,
    PatternAnalyzerTool,
}

impl Check {
    pub const ALL: [Check; 7] = [
        Check::GenesisConfig,
        Check::StateTracking,
        Check::Documentation,
        Check::GitIntegration,
        Check::ValidationTool,
        Check::StateTrackerTool,
        Check::PatternAnalyzerTool,
    ];

    /// Lower-case subject, as in "Testing genesis configuration...".
    pub fn subject(&self) -> &'static str {
        match self {
            Self::GenesisConfig => "genesis configuration",
            Self::StateTracking => "state tracking",
            Self::Documentation => "documentation",
            Self::GitIntegration => "Git integration",
            Self::ValidationTool => "validation tool",
            Self::StateTrackerTool => "state tracker tool",
            Self::PatternAnalyzerTool => "pattern analyzer tool",
        }
    }

    /// Run the check, returning the success message.
    pub fn run(&self, ctx: &ProjectContext) -> anyhow::Result<String> {
        match self {
            Self::GenesisConfig => check_genesis_config(ctx),
            Self::StateTracking => check_state_tracking(ctx),
            Self::Documentation => check_documentation(ctx),
            Self::GitIntegration => check_git(ctx),
            Self::ValidationTool => check_validation_tool(ctx),
            Self::StateTrackerTool => check_state_tracker_tool(ctx),
            Self::PatternAnalyzerTool => check_pattern_analyzer_tool(ctx),
        }
    }
}

/// Outcome of one check.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub check: Check,
    /// Success message, or the failure line.
    pub message: String,
    pub passed: bool,
}

/// Outcome of a whole suite run.
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

/// Progress notifications from [`IntegrationSuite::run_with`].
#[derive(Debug)]
pub enum SuiteEvent<'a> {
    Started(Check),
    Finished(&'a CheckOutcome),
}

/// Runs every [`Check`] against a project.
pub struct IntegrationSuite {
    ctx: ProjectContext,
}

impl IntegrationSuite {
    pub fn new(ctx: ProjectContext) -> Self {
        Self { ctx }
    }

    /// Run all checks, reporting progress to `on_event`.
    pub fn run_with(&self, mut on_event: impl FnMut(SuiteEvent<'_>)) -> SuiteReport {
        let mut report = SuiteReport::default();

        for check in Check::ALL {
            on_event(SuiteEvent::Started(check));
            let outcome = match check.run(&self.ctx) {
                Ok(message) => CheckOutcome {
                    check,
                    message,
                    passed: true,
                },
                Err(e) => {
                    tracing::debug!("{} check failed: {:#}", check.subject(), e);
                    CheckOutcome {
                        check,
                        message: format!("{} test failed: {:#}", capitalize(check.subject()), e),
                        passed: false,
                    }
                }
            };
            on_event(SuiteEvent::Finished(&outcome));
            report.outcomes.push(outcome);
        }

        report
    }

    pub fn run(&self) -> SuiteReport {
        self.run_with(|_| {})
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn check_genesis_config(ctx: &ProjectContext) -> anyhow::Result<String> {
    let doc = load_genesis_document(&ctx.genesis_file)?;

    for field in ["genesisTime", "initiator", "rootIdentityKey"] {
        ensure!(doc.get(field).is_some(), "missing field '{}'", field);
    }
    ensure!(
        doc.get("mode").and_then(Value::as_str) == Some(GENESIS_MODE),
        "mode is not {}",
        GENESIS_MODE
    );

    let commitments = doc.get("commitments").context("missing field 'commitments'")?;
    for name in REQUIRED_COMMITMENTS {
        let enabled = commitments
            .get(name)
            .and_then(|c| c.get("enabled"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        ensure!(enabled, "commitment '{}' is not enabled", name);
    }

    Ok("Genesis configuration is valid".to_string())
}

fn check_state_tracking(ctx: &ProjectContext) -> anyhow::Result<String> {
    let content = fs::read_to_string(&ctx.state_file)
        .with_context(|| format!("cannot read {}", ctx.state_file.display()))?;
    let state: Value = serde_json::from_str(&content)?;

    for key in ["currentState", "stateHistory", "patterns", "dimensions"] {
        ensure!(state.get(key).is_some(), "missing key '{}'", key);
    }

    let current = &state["currentState"];
    ensure!(
        current.get("genaMode").and_then(Value::as_bool) == Some(true),
        "GENⱯ mode is not active"
    );
    ensure!(
        current.get("activeCommitments").and_then(Value::as_u64) == Some(TOTAL_COMMITMENTS as u64),
        "expected {} active commitments",
        TOTAL_COMMITMENTS
    );

    Ok("State tracking is valid".to_string())
}

fn check_documentation(ctx: &ProjectContext) -> anyhow::Result<String> {
    for doc in REQUIRED_DOCS {
        let path = ctx.root.join(doc);
        let content =
            fs::read_to_string(&path).with_context(|| format!("cannot read {}", doc))?;
        ensure!(!content.is_empty(), "{} is empty", doc);
    }
    Ok("Documentation is complete".to_string())
}

fn check_git(ctx: &ProjectContext) -> anyhow::Result<String> {
    let git = ctx.git();
    if !git.is_repository() {
        bail!("{} is not a git repository", ctx.root.display());
    }
    let count = git.commit_count()?;
    ensure!(
        count >= MIN_COMMITS,
        "only {} commits, expected at least {}",
        count,
        MIN_COMMITS
    );
    Ok(format!("Git integration working ({} commits)", count))
}

fn check_validation_tool(ctx: &ProjectContext) -> anyhow::Result<String> {
    let report = GenesisValidator::new(&ctx.genesis_file, ctx.git()).run();
    ensure!(
        report.passed(),
        "validator reported {} error(s)",
        report.errors()
    );
    Ok("Validation tool works correctly".to_string())
}

fn check_state_tracker_tool(ctx: &ProjectContext) -> anyhow::Result<String> {
    let summary = StateTracker::load(&ctx.state_file)?.summary();
    ensure!(summary.contains("STATE SUMMARY"), "summary has no heading");
    ensure!(
        summary.contains("GENⱯ Mode: Active"),
        "summary does not report GENⱯ mode as active"
    );
    Ok("State tracker tool works correctly".to_string())
}

fn check_pattern_analyzer_tool(ctx: &ProjectContext) -> anyhow::Result<String> {
    let report = PatternAnalyzer::new(ctx.git(), &ctx.genesis_file, ctx.max_depth)
        .analyze()
        .to_string();
    ensure!(
        report.contains("RECURSIVE PATTERN ANALYSIS REPORT"),
        "report has no heading"
    );
    ensure!(
        report.contains("Patterns Detected:"),
        "report has no pattern count"
    );
    Ok("Pattern analyzer tool works correctly".to_string())
}
