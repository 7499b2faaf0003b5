//! Command-line interface for Genesis.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`action`] - Mapping of the command token to an [`Action`]
//! - [`dispatcher`] - Routing of actions to delegates
//! - [`usage`] - Help text

pub mod action;
pub mod args;
pub mod dispatcher;
pub mod usage;

pub use action::Action;
pub use args::Cli;
pub use dispatcher::{banner, CommandDispatcher, CommandResult, STATUS_TITLE};
pub use usage::usage_text;
