//! Recursive pattern analysis.
//!
//! [`PatternAnalyzer`] looks at commit history (repeated once per recursion
//! level up to the configured maximum depth), the tracked file list, and
//! the presence of documentation and framework files.

pub mod analyzer;
pub mod report;

pub use analyzer::{commit_patterns, file_patterns, keyword_ranking, PatternAnalyzer};
pub use report::{type_heading, Pattern, PatternReport};
