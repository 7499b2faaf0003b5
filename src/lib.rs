//! Genesis - Command dispatcher for the Genesis Commitment framework.
//!
//! Genesis maps a single command word to one or more delegates (validation,
//! state tracking, pattern analysis, integration tests) and prints a banner
//! before each. Delegates are either external programs named in
//! `genesis.yml` or the tools built into this crate.
//!
//! # Modules
//!
//! - [`cli`] - Argument parsing, actions and the dispatcher
//! - [`config`] - Configuration loading and parsing
//! - [`delegate`] - The delegate trait and its implementations
//! - [`error`] - Error types and result aliases
//! - [`integration`] - Integration checks over a project
//! - [`patterns`] - Recursive pattern analysis of git history
//! - [`shell`] - Process execution and git access
//! - [`state`] - The persisted framework state
//! - [`ui`] - Terminal output
//! - [`validation`] - Genesis document validation
//!
//! # Example
//!
//! ```
//! use genesis::cli::{Action, CommandDispatcher};
//! use genesis::config::GenesisConfig;
//! use genesis::delegate::DelegateSet;
//! use genesis::ui::MockUI;
//! use std::path::Path;
//!
//! let delegates = DelegateSet::from_config(&GenesisConfig::default(), Path::new("."));
//! let dispatcher = CommandDispatcher::new(delegates);
//!
//! let mut ui = MockUI::new();
//! let result = dispatcher.dispatch(&Action::parse(Some("bogus")), &mut ui).unwrap();
//! assert_eq!(result.exit_code, 1);
//! assert_eq!(ui.messages()[0], "Unknown command: bogus");
//! ```

pub mod cli;
pub mod config;
pub mod delegate;
pub mod error;
pub mod integration;
pub mod patterns;
pub mod shell;
pub mod state;
pub mod ui;
pub mod validation;

pub use error::{GenesisError, Result};
