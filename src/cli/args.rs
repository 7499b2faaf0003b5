//! CLI argument definitions.
//!
//! The command is a single free-form token rather than a clap subcommand so
//! that unknown words, `help`, `-h` and `--help` all reach the dispatcher.

use clap::Parser;
use std::path::PathBuf;

/// Genesis - Commitment framework command dispatcher.
#[derive(Debug, Parser)]
#[command(name = "genesis")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_help_subcommand = true)]
pub struct Cli {
    /// Path to config file (overrides ./genesis.yml)
    #[arg(short, long, env = "GENESIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, env = "GENESIS_PROJECT")]
    pub project: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Command to run (validate, state, analyze, test, status, help)
    #[arg(value_name = "COMMAND", allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Anything after the command is ignored.
    #[arg(hide = true, allow_hyphen_values = true, num_args = 0..)]
    pub extra: Vec<String>,
}
