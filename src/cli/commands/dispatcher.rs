//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, VerifyArgs};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
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

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    python: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    ///
    /// `python` is an explicit interpreter choice; `None` lets the probe
    /// search for one.
    pub fn new(project_root: PathBuf, python: Option<PathBuf>) -> Self {
        Self {
            project_root,
            python,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Verify(args)) => {
                let cmd = super::verify::VerifyCommand::new(
                    &self.project_root,
                    self.python.as_deref(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(
                    &self.project_root,
                    self.python.as_deref(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            None => {
                // Default to verify with default args
                let cmd = super::verify::VerifyCommand::new(
                    &self.project_root,
                    self.python.as_deref(),
                    VerifyArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}
