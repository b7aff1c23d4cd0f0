//! Error types for devcheck operations.
//!
//! This module defines [`DevcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `CapabilityUnavailable` is the only error a verification run can hit,
//!   and the verifier recovers from it itself
//! - Profile errors are configuration problems reported before any probe
//! - Use `anyhow::Error` (via `DevcheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for devcheck operations.
#[derive(Debug, Error)]
pub enum DevcheckError {
    /// A capability could not be loaded (not installed, import-time failure,
    /// incompatible version).
    #[error("Missing dependency: {name} ({reason})")]
    CapabilityUnavailable { name: String, reason: String },

    /// No Python interpreter could be located.
    #[error("No Python interpreter found (searched: {searched})")]
    InterpreterNotFound { searched: String },

    /// Profile file not found at the given location.
    #[error("Profile not found: {path}")]
    ProfileNotFound { path: PathBuf },

    /// Failed to parse a profile file.
    #[error("Failed to parse profile at {path}: {message}")]
    ProfileParseError { path: PathBuf, message: String },

    /// No built-in profile with this name.
    #[error("Unknown profile: {name}")]
    UnknownProfile { name: String },

    /// Profile structure or values are invalid.
    #[error("Invalid profile: {message}")]
    ProfileValidationError { message: String },

    /// A child process could not be started.
    #[error("Failed to start {command}: {message}")]
    CommandFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DevcheckError {
    /// Whether this error comes from a bad profile rather than the environment.
    pub fn is_profile_error(&self) -> bool {
        matches!(
            self,
            Self::ProfileNotFound { .. }
                | Self::ProfileParseError { .. }
                | Self::UnknownProfile { .. }
                | Self::ProfileValidationError { .. }
        )
    }
}

/// Result type alias for devcheck operations.
pub type Result<T> = std::result::Result<T, DevcheckError>;
