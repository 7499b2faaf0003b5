//! Detected patterns and the rendered analysis report.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;

use crate::validation::RULE_WIDTH;

/// A single pattern found in the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    /// Machine name such as `commit_frequency`.
    pub pattern_type: String,
    pub description: String,
    /// Recursion level the pattern was found at.
    pub depth: usize,
    /// 0.0 to 1.0.
    pub confidence: f64,
}

impl Pattern {
    pub fn new(
        pattern_type: &str,
        description: impl Into<String>,
        depth: usize,
        confidence: f64,
    ) -> Self {
        Self {
            pattern_type: pattern_type.to_string(),
            description: description.into(),
            depth,
            confidence,
        }
    }
}

/// Heading for a pattern type: `commit_frequency` → `COMMIT FREQUENCY`.
pub fn type_heading(pattern_type: &str) -> String {
    pattern_type.to_uppercase().replace('_', " ")
}

/// Result of a full analysis run.
#[derive(Debug, Clone)]
pub struct PatternReport {
    pub generated_at: DateTime<Utc>,
    pub max_depth: usize,
    pub patterns: Vec<Pattern>,
    /// Analyses that could not run, e.g. because git failed.
    pub warnings: Vec<String>,
}

impl PatternReport {
    /// Patterns grouped by type, types in sorted order, patterns in
    /// detection order.
    pub fn by_type(&self) -> BTreeMap<&str, Vec<&Pattern>> {
        let mut groups: BTreeMap<&str, Vec<&Pattern>> = BTreeMap::new();
        for pattern in &self.patterns {
            groups
                .entry(pattern.pattern_type.as_str())
                .or_default()
                .push(pattern);
        }
        groups
    }
}

impl fmt::Display for PatternReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{}", rule)?;
        writeln!(f, "RECURSIVE PATTERN ANALYSIS REPORT")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Timestamp: {}", self.generated_at.to_rfc3339())?;
        writeln!(f, "Max Recursive Depth: {}", self.max_depth)?;
        writeln!(f, "Patterns Detected: {}", self.patterns.len())?;
        writeln!(f)?;
        writeln!(f, "DETECTED PATTERNS")?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        for (pattern_type, patterns) in self.by_type() {
            writeln!(f)?;
            writeln!(f, "{}:", type_heading(pattern_type))?;
            for pattern in patterns {
                writeln!(
                    f,
                    "{}• {} (confidence: {:.0}%, depth: {})",
                    "  ".repeat(pattern.depth),
                    pattern.description,
                    pattern.confidence * 100.0,
                    pattern.depth
                )?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", rule)
    }
}
