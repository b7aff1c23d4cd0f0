//! Verification report.

use crate::capability::{CapabilityResult, CapabilityStatus};

use super::state::VerificationState;

/// What happened to one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    /// Group label.
    pub label: String,
    /// Every capability attempted, in order. Stops at the first failure.
    pub results: Vec<CapabilityResult>,
}

impl GroupReport {
    /// Whether every attempted capability loaded.
    ///
    /// A group only appears in a report once it has been attempted, so a
    /// passing group always has all its members here.
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.status.is_loaded())
    }
}

/// The outcome of a verification run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VerificationReport {
    /// Name of the profile that was checked.
    pub profile: String,
    /// Groups that were attempted, in order.
    pub groups: Vec<GroupReport>,
    /// Terminal state of the run.
    pub state: VerificationState,
}

impl VerificationReport {
    /// Whether every group loaded.
    pub fn is_ready(&self) -> bool {
        self.state == VerificationState::Ready
    }

    /// Name of the capability that stopped the run, if any.
    pub fn missing(&self) -> Option<&str> {
        match &self.state {
            VerificationState::Failed { capability, .. } => Some(capability.as_str()),
            _ => None,
        }
    }

    /// Reason the missing capability failed to load, if any.
    pub fn missing_reason(&self) -> Option<&str> {
        self.groups
            .iter()
            .flat_map(|g| g.results.iter())
            .find_map(|r| match &r.status {
                CapabilityStatus::Unavailable { reason } => Some(reason.as_str()),
                CapabilityStatus::Loaded { .. } => None,
            })
    }

    /// Number of groups that fully loaded.
    pub fn passed_groups(&self) -> usize {
        self.groups.iter().filter(|g| g.passed()).count()
    }

    /// Names of every capability that was attempted, in order.
    pub fn attempted(&self) -> Vec<&str> {
        self.groups
            .iter()
            .flat_map(|g| g.results.iter())
            .map(|r| r.name.as_str())
            .collect()
    }
}
