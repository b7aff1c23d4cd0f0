//! Capability status types.
//!
//! Each attempted load produces a [`CapabilityResult`] recording whether the
//! capability loaded and, if not, why.

/// The outcome of loading a single capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// The capability loaded.
    Loaded {
        /// Version reported by the library, when it exposes one.
        version: Option<String>,
    },

    /// The capability could not be loaded.
    Unavailable {
        /// Why the load failed, as reported by the loader.
        reason: String,
    },
}

impl CapabilityStatus {
    /// Whether the capability loaded.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// The result of attempting one capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityResult {
    /// The capability name that was attempted
    pub name: String,
    /// What happened
    pub status: CapabilityStatus,
}

impl CapabilityResult {
    /// Create a loaded result.
    pub fn loaded(name: &str, version: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            status: CapabilityStatus::Loaded { version },
        }
    }

    /// Create an unavailable result.
    pub fn unavailable(name: &str, reason: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: CapabilityStatus::Unavailable {
                reason: reason.into(),
            },
        }
    }
}
