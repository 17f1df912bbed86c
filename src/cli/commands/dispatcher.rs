//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing parsed arguments

use std::io::Write;

use clap::CommandFactory;

use crate::cli::args::Cli;
use crate::error::Result;

use super::run::RunCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing its output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Process exit code (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self { exit_code }
    }

    /// Whether the command succeeded.
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Prints usage when there is nothing to do.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        writeln!(out, "{}", Cli::command().render_help())?;
        Ok(CommandResult::success())
    }
}

/// Dispatches parsed arguments to a command.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    ///
    /// Without template names and without `--list` this prints usage and
    /// succeeds. A failed command reports `Error: <message>` on `err` and
    /// yields exit code 1; nothing is written to `out` in that case.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write, err: &mut dyn Write) -> CommandResult {
        let outcome = match cli.mode() {
            Some(mode) => RunCommand::new(cli.endpoints(), mode).execute(out),
            None => HelpCommand.execute(out),
        };

        match outcome {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!("command failed: {:?}", e);
                // Nowhere left to report a failing error stream.
                let _ = writeln!(err, "Error: {}", e);
                CommandResult::failure(1)
            }
        }
    }
}
