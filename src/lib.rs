//! devcheck - Verify that a development container's libraries actually load.
//!
//! devcheck reads a profile of capability groups (for example the data
//! science stack, database connectors, ML frameworks and OCR tools of an
//! ML devcontainer), imports each capability through the container's
//! Python interpreter, and reports one status line per group. The first
//! capability that fails to load stops the run.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`capability`] - Interpreter discovery and capability loading
//! - [`error`] - Error types and result aliases
//! - [`profile`] - Profile schema, built-in profiles and discovery
//! - [`shell`] - Process execution and CI detection
//! - [`ui`] - Status lines, spinners and terminal output
//! - [`verifier`] - The ordered group check and its report
//!
//! # Example
//!
//! ```
//! use devcheck::profile::{builtin, validate_profile};
//!
//! let profile = builtin::load("ml-project").unwrap();
//! assert!(validate_profile(&profile).is_empty());
//! assert_eq!(profile.groups[0].label, "Core data science stack");
//! ```
//!
//! See [`verifier`] for running a check against a profile.

pub mod capability;
pub mod cli;
pub mod error;
pub mod profile;
pub mod shell;
pub mod ui;
pub mod verifier;

pub use error::{DevcheckError, Result};
