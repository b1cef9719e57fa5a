//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::state::PathStore;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `out` - Where user-facing output goes (stdout in the binary)
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Forward a child process exit code.
    pub fn from_exit_code(exit_code: i32) -> Self {
        Self {
            success: exit_code == 0,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    store: PathStore,
}

impl CommandDispatcher {
    /// Create a new dispatcher using the given settings store.
    pub fn new(store: PathStore) -> Self {
        Self { store }
    }

    /// Create a dispatcher for `--settings`, falling back to the default location.
    pub fn from_cli(cli: &Cli) -> Self {
        let store = match &cli.settings {
            Some(file) => PathStore::new(file),
            None => PathStore::at_default_location(),
        };
        Self::new(store)
    }

    /// Get the settings store.
    pub fn store(&self) -> &PathStore {
        &self.store
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Commands::Run(args) => {
                let cmd = super::run::RunCommand::new(self.store.clone(), args.clone());
                cmd.execute(out)
            }
            Commands::Status(args) => {
                let cmd = super::status::StatusCommand::new(self.store.clone(), args.clone());
                cmd.execute(out)
            }
            Commands::Reset => {
                let cmd = super::reset::ResetCommand::new(self.store.clone());
                cmd.execute(out)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_forwards_exit_code() {
        assert!(CommandResult::from_exit_code(0).success);
        let result = CommandResult::from_exit_code(42);
        assert!(!result.success);
        assert_eq!(result.exit_code, 42);
    }

    #[test]
    fn dispatcher_uses_settings_flag() {
        let cli = Cli::parse_from(["fxboot", "--settings", "/test/boot.properties", "reset"]);
        let dispatcher = CommandDispatcher::from_cli(&cli);
        assert_eq!(dispatcher.store().file(), Path::new("/test/boot.properties"));
    }
}
