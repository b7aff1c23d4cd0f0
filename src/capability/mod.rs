//! Capability probing.
//!
//! This module locates the interpreter that owns the container's libraries
//! and attempts to load individual capabilities through it.
//!
//! # Modules
//!
//! - [`probe`] - Interpreter discovery (virtualenv, conda, PATH, pyenv)
//! - [`loader`] - The [`CapabilityLoader`] seam and the Python import loader
//! - [`status`] - Per-capability load results

pub mod loader;
pub mod probe;
pub mod status;

pub use loader::{CapabilityLoader, LoadedCapability, PythonImportLoader};
pub use probe::PythonProbe;
pub use status::{CapabilityResult, CapabilityStatus};
