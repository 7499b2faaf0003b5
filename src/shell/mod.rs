//! Process execution and git access.

pub mod command;
pub mod git;

pub use command::{execute, CommandOptions, CommandResult};
pub use git::{parse_log_line, CommitRecord, GitRepo};
