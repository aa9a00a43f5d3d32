//! Command-line interface.
//!
//! With no subcommand the binary launches the TUI; every subcommand runs
//! headless and exits.

mod common;

pub use common::*;

use crate::simulate;
use crate::state::{ScreenMachine, ScrollLatch};
use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use tracing::info;

/// A gesture-driven phone screen in your terminal
#[derive(Parser, Debug)]
#[command(name = "peekphone", version, about = "A gesture-driven phone screen in your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this config file instead of ~/.config/peekphone/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a gesture script without a terminal UI and print each transition
    Simulate {
        /// Script file, one command per line
        script: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the configuration file location
    ConfigPath,
    /// Print the log file location
    Logs,
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        #[arg(value_enum)]
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Execute the CLI command. Does nothing when no command was given.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::Simulate { script, json }) => {
                Self::cmd_simulate(self.config.as_deref(), &script, json)
            }
            Some(Commands::ConfigPath) => {
                println!("{}", resolve_config_path(self.config.as_deref()).display());
                Ok(())
            }
            Some(Commands::Logs) => {
                println!("{}", crate::utils::get_log_dir().join("peekphone.log").display());
                Ok(())
            }
            Some(Commands::Completions { shell }) => Self::cmd_completions(shell),
            None => Ok(()),
        }
    }

    fn cmd_simulate(config: Option<&Path>, script: &Path, json: bool) -> Result<()> {
        info!("CLI: simulate {:?}", script);
        let ctx = CliContext::load(config)?;
        let mut machine = ScreenMachine::with_scroll_lock(ScrollLatch::new())
            .with_thresholds(ctx.config.gestures.thresholds())
            .with_controls(ctx.config.controls.clone());

        let report = simulate::simulate_file(&mut machine, script)?;
        if json {
            let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{}", out);
        } else {
            if report.transitions.is_empty() {
                print_info("No transitions");
            }
            println!("{}", report);
        }
        Ok(())
    }

    fn cmd_completions(shell: Option<Shell>) -> Result<()> {
        let Some(shell) = shell.or_else(Shell::from_env) else {
            bail!("Could not detect the shell, pass one explicitly");
        };
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_simulate() {
        let cli = Cli::parse_from(["peekphone", "simulate", "swipe.txt", "--json"]);
        match cli.command {
            Some(Commands::Simulate { script, json }) => {
                assert_eq!(script, PathBuf::from("swipe.txt"));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["peekphone", "config-path", "--config", "/tmp/p.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/p.toml")));
        assert!(matches!(cli.command, Some(Commands::ConfigPath)));
    }
}
