//! Command-line interface for devcheck.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ListArgs, ProfileArgs, VerifyArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
