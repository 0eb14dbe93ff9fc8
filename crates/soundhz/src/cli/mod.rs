//! Command-line interface for soundhz.
//!
//! This module provides the CLI structure for the `soundhz` binary, a thin
//! front over the sound board store.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{AddCommand, ConfigCommand, ListCommand, RemoveCommand};

/// soundhz - Organize your sound boards
///
/// Manage named sound boards stored in a single JSON document in your
/// local data directory.
#[derive(Debug, Parser)]
#[command(name = "soundhz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all sound boards
    List(ListCommand),

    /// Add a new sound board
    Add(AddCommand),

    /// Remove sound boards by title
    Remove(RemoveCommand),

    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "soundhz");
    }

    #[test]
    fn test_verbosity_mapping() {
        let cli = Cli::try_parse_from(["soundhz", "list"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);

        let cli = Cli::try_parse_from(["soundhz", "-v", "list"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);

        let cli = Cli::try_parse_from(["soundhz", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);

        let cli = Cli::try_parse_from(["soundhz", "-q", "list"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from(["soundhz", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::List(ListCommand { json: true })));
    }

    #[test]
    fn test_parse_add() {
        let cli =
            Cli::try_parse_from(["soundhz", "add", "Retro", "-d", "Console era"]).unwrap();
        match cli.command {
            Command::Add(cmd) => {
                assert_eq!(cmd.title, "Retro");
                assert_eq!(cmd.description, "Console era");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_add_defaults_description() {
        let cli = Cli::try_parse_from(["soundhz", "add", "Retro"]).unwrap();
        match cli.command {
            Command::Add(cmd) => assert_eq!(cmd.description, ""),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_remove() {
        let cli = Cli::try_parse_from(["soundhz", "remove", "Retro"]).unwrap();
        assert!(matches!(cli.command, Command::Remove(_)));
    }

    #[test]
    fn test_parse_config_path() {
        let cli = Cli::try_parse_from(["soundhz", "config", "path"]).unwrap();
        assert!(matches!(cli.command, Command::Config(ConfigCommand::Path)));
    }

    #[test]
    fn test_parse_with_config_file() {
        let cli = Cli::try_parse_from(["soundhz", "-c", "/custom/config.toml", "list"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
