//! Child process execution and environment detection.

pub mod command;
pub mod platform;

pub use command::{execute_program, CommandOptions, CommandResult};
pub use platform::{is_ci, is_ci_with_env};
