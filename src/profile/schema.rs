//! Profile schema definitions.
//!
//! A profile maps to a YAML file listing the capability groups a container
//! is expected to provide, in the order they are checked.

use serde::{Deserialize, Serialize};

/// Root structure of a profile file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile name (e.g. `ml-project`).
    pub name: String,

    /// One-line description shown by `devcheck list`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Banner printed once every group has loaded.
    #[serde(default = "default_ready")]
    pub ready: String,

    /// Follow-up lines printed after the ready banner.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,

    /// Capability groups, checked in order.
    pub groups: Vec<CapabilityGroup>,
}

fn default_ready() -> String {
    "Environment is ready!".to_string()
}

/// A named cluster of capabilities that succeed or fail together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityGroup {
    /// Label used in the group's status line.
    pub label: String,

    /// Members, checked in order.
    pub capabilities: Vec<Capability>,
}

/// A single external library whose load is probed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    /// Name reported when the capability is missing.
    pub name: String,

    /// Import path, when it differs from `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,

    /// Distribution package that provides the module, for install hints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// What the capability is for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Capability {
    /// Create a capability whose module path equals its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module: None,
            package: None,
            description: None,
        }
    }

    /// The module path handed to the loader.
    pub fn module(&self) -> &str {
        self.module.as_deref().unwrap_or(&self.name)
    }

    /// Install hint for a missing capability, if a package is declared.
    pub fn install_hint(&self) -> Option<String> {
        self.package
            .as_ref()
            .map(|package| format!("pip install {}", package))
    }
}

impl Profile {
    /// Total number of capabilities across all groups.
    pub fn capability_count(&self) -> usize {
        self.groups.iter().map(|g| g.capabilities.len()).sum()
    }

    /// Iterate over every capability in check order.
    pub fn capabilities(&self) -> impl Iterator<Item = &Capability> {
        self.groups.iter().flat_map(|g| g.capabilities.iter())
    }
}
