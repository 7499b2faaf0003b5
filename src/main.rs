//! Genesis CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use genesis::cli::{Action, Cli, CommandDispatcher};
use genesis::config::{load_config, GenesisConfig};
use genesis::delegate::DelegateSet;
use genesis::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so stdout carries only command output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("genesis=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("genesis=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn project_root(cli: &Cli) -> anyhow::Result<PathBuf> {
    match &cli.project {
        // Delegates run with the root as cwd, so it must not stay relative.
        Some(path) => std::path::absolute(path)
            .with_context(|| format!("Failed to resolve project path {}", path.display())),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}

fn build_dispatcher(cli: &Cli, action: &Action) -> anyhow::Result<CommandDispatcher> {
    let root = project_root(cli)?;

    // Help and unknown commands never touch the configuration.
    let config = if action.uses_delegates() {
        load_config(&root, cli.config.as_deref())?
    } else {
        GenesisConfig::default()
    };
    tracing::debug!("Using config: {:?}", config);

    Ok(CommandDispatcher::new(DelegateSet::from_config(
        &config, &root,
    )))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Genesis starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    if !cli.extra.is_empty() {
        tracing::warn!("Ignoring extra arguments: {}", cli.extra.join(" "));
    }

    let mut ui = TerminalUI::new();
    let action = Action::parse(cli.command.as_deref());

    let result = build_dispatcher(&cli, &action)
        .and_then(|dispatcher| Ok(dispatcher.dispatch(&action, &mut ui)?));

    match result {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {:#}", e));
            ExitCode::from(1)
        }
    }
}
