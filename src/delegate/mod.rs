//! Delegates: the tools that carry out each dispatched action.
//!
//! The dispatcher only knows the [`Delegate`] trait. A delegate either runs
//! an external program ([`ProcessDelegate`]) or one of the tools compiled
//! into this crate ([`builtin`]). Tests substitute their own
//! implementations.

pub mod builtin;
pub mod process;

use std::fmt;
use std::path::Path;

use crate::config::{DelegateSpec, GenesisConfig, ProjectContext};
use crate::error::Result;
use crate::ui::UserInterface;

pub use builtin::{AnalyzeTool, IntegrationTool, StateTool, ValidateTool};
pub use process::ProcessDelegate;

/// How a delegate finished.
///
/// The dispatcher logs this but never acts on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelegateOutcome {
    Succeeded,
    Failed { code: Option<i32> },
}

impl DelegateOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// A callable that performs one action.
///
/// `Err` means the delegate could not run at all (for example, the program
/// does not exist). A delegate that ran and failed returns
/// `Ok(DelegateOutcome::Failed { .. })`.
pub trait Delegate {
    /// Name used in logs.
    fn name(&self) -> &str;

    fn run(&self, ui: &mut dyn UserInterface) -> Result<DelegateOutcome>;
}

/// The action a delegate is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelegateKind {
    Validate,
    State,
    Analyze,
    Test,
}

impl DelegateKind {
    pub const ALL: [DelegateKind; 4] = [
        DelegateKind::Validate,
        DelegateKind::State,
        DelegateKind::Analyze,
        DelegateKind::Test,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::State => "state",
            Self::Analyze => "analyze",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for DelegateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One delegate per delegating action.
pub struct DelegateSet {
    validate: Box<dyn Delegate>,
    state: Box<dyn Delegate>,
    analyze: Box<dyn Delegate>,
    test: Box<dyn Delegate>,
}

impl DelegateSet {
    pub fn new(
        validate: Box<dyn Delegate>,
        state: Box<dyn Delegate>,
        analyze: Box<dyn Delegate>,
        test: Box<dyn Delegate>,
    ) -> Self {
        Self {
            validate,
            state,
            analyze,
            test,
        }
    }

    /// Build the delegates named by `config` for the project at `root`.
    pub fn from_config(config: &GenesisConfig, root: &Path) -> Self {
        let ctx = ProjectContext::new(root, config);
        let build = |kind: DelegateKind, spec: &DelegateSpec| -> Box<dyn Delegate> {
            match spec.resolve(root) {
                DelegateSpec::Builtin => builtin::for_kind(kind, ctx.clone()),
                DelegateSpec::Process { program } => {
                    Box::new(ProcessDelegate::new(kind.as_str(), program, root))
                }
            }
        };

        let d = &config.delegates;
        Self {
            validate: build(DelegateKind::Validate, &d.validate),
            state: build(DelegateKind::State, &d.state),
            analyze: build(DelegateKind::Analyze, &d.analyze),
            test: build(DelegateKind::Test, &d.test),
        }
    }

    pub fn get(&self, kind: DelegateKind) -> &dyn Delegate {
        match kind {
            DelegateKind::Validate => self.validate.as_ref(),
            DelegateKind::State => self.state.as_ref(),
            DelegateKind::Analyze => self.analyze.as_ref(),
            DelegateKind::Test => self.test.as_ref(),
        }
    }
}

impl fmt::Debug for DelegateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegateSet")
            .field("validate", &self.validate.name())
            .field("state", &self.state.name())
            .field("analyze", &self.analyze.name())
            .field("test", &self.test.name())
            .finish()
    }
}
