//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// devcheck - Verify that a development container's libraries load.
#[derive(Debug, Parser)]
#[command(name = "devcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Python interpreter used to import capabilities
    #[arg(long, global = true, env = "DEVCHECK_PYTHON", value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Directory searched for profile files (overrides current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Show versions, failure reasons and install hints
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show the final outcome
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that every capability group loads (default if no command specified)
    Verify(VerifyArgs),

    /// Show the groups and capabilities that would be checked
    List(ListArgs),
}

/// Which profile to use.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProfileArgs {
    /// Built-in profile to check
    #[arg(long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Profile file to check (overrides --profile and discovered files)
    #[arg(long, value_name = "FILE", conflicts_with = "profile")]
    pub manifest: Option<PathBuf>,
}

/// Arguments for the `verify` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Exit with status 1 when a capability is missing
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Output the profile as JSON
    #[arg(long)]
    pub json: bool,
}
