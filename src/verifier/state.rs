//! Verification state machine.
//!
//! ```text
//! NotStarted -> CheckingGroup(0) -> ... -> CheckingGroup(n-1) -> Ready
//!                      \                          \
//!                       +--------------------------+--> Failed
//! ```
//!
//! `Ready` and `Failed` are terminal.

/// Where a verification run is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VerificationState {
    /// No group has been checked yet.
    #[default]
    NotStarted,

    /// The group at this index is being checked.
    CheckingGroup(usize),

    /// Every group loaded.
    Ready,

    /// A capability failed to load; nothing after it was attempted.
    Failed {
        /// Index of the group that failed.
        group: usize,
        /// Name of the capability that could not be loaded.
        capability: String,
    },
}

impl VerificationState {
    /// Whether the run is over.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready | Self::Failed { .. })
    }

    /// Begin checking the next group.
    ///
    /// Valid from `NotStarted` (entering group 0) and from the previous
    /// group.
    pub(crate) fn enter(self, group: usize) -> Self {
        debug_assert!(
            matches!(
                (&self, group),
                (Self::NotStarted, 0)
            ) || matches!(&self, Self::CheckingGroup(prev) if prev + 1 == group),
            "cannot enter group {} from {:?}",
            group,
            self
        );
        tracing::debug!("Checking group {}", group);
        Self::CheckingGroup(group)
    }

    /// The current group failed on `capability`.
    pub(crate) fn fail(self, capability: &str) -> Self {
        match self {
            Self::CheckingGroup(group) => {
                tracing::debug!("Group {} failed on {}", group, capability);
                Self::Failed {
                    group,
                    capability: capability.to_string(),
                }
            }
            other => {
                debug_assert!(false, "cannot fail from {:?}", other);
                other
            }
        }
    }

    /// Every group passed.
    ///
    /// Valid from the last group, or from `NotStarted` when there are no
    /// groups at all.
    pub(crate) fn complete(self) -> Self {
        match self {
            Self::NotStarted | Self::CheckingGroup(_) => Self::Ready,
            other => {
                debug_assert!(false, "cannot complete from {:?}", other);
                other
            }
        }
    }
}
