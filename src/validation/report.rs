//! Validation results and the rendered report.

use chrono::{DateTime, Utc};
use std::fmt;
use std::path::PathBuf;

/// Width of the `=` and `-` rules in text reports.
pub const RULE_WIDTH: usize = 70;

/// Severity of a single validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✗",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding recorded by a check.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub level: Level,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// All findings for one genesis document.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub genesis_file: PathBuf,
    pub generated_at: DateTime<Utc>,
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    pub fn count(&self, level: Level) -> usize {
        self.results.iter().filter(|r| r.level == level).count()
    }

    pub fn successes(&self) -> usize {
        self.count(Level::Success)
    }

    pub fn warnings(&self) -> usize {
        self.count(Level::Warning)
    }

    pub fn errors(&self) -> usize {
        self.count(Level::Error)
    }

    /// A document passes when no check reported an error.
    pub fn passed(&self) -> bool {
        self.errors() == 0
    }

    /// Messages recorded at `level`, in check order.
    pub fn messages(&self, level: Level) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.message.as_str())
            .collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        let thin = "-".repeat(RULE_WIDTH);

        writeln!(f, "{}", rule)?;
        writeln!(f, "GENESIS COMMITMENT VALIDATION REPORT")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Timestamp: {}", self.generated_at.to_rfc3339())?;
        writeln!(f, "Genesis File: {}", self.genesis_file.display())?;
        writeln!(f)?;
        writeln!(f, "SUMMARY")?;
        writeln!(f, "{}", thin)?;
        writeln!(f, "✓ Successes: {}", self.successes())?;
        writeln!(f, "⚠ Warnings:  {}", self.warnings())?;
        writeln!(f, "✗ Errors:    {}", self.errors())?;
        writeln!(f)?;
        writeln!(f, "DETAILS")?;
        writeln!(f, "{}", thin)?;
        for result in &self.results {
            writeln!(
                f,
                "{} [{}] {}",
                result.level.symbol(),
                result.level,
                result.message
            )?;
        }
        write!(f, "{}", rule)
    }
}
