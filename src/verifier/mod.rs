//! Environment verification.
//!
//! [`run_verification`] walks a profile's groups in order, loading every
//! capability through a [`CapabilityLoader`]. Each group that fully loads
//! gets one success line. The first capability that fails stops the run:
//! later capabilities and groups are never attempted, and a single failure
//! line names it. Nothing escapes to the caller; the outcome is returned as
//! a [`VerificationReport`].
//!
//! # Example
//!
//! ```
//! use devcheck::capability::{CapabilityLoader, LoadedCapability};
//! use devcheck::error::Result;
//! use devcheck::profile::{builtin, Capability};
//! use devcheck::ui::MockUI;
//! use devcheck::verifier::run_verification;
//!
//! struct Everything;
//!
//! impl CapabilityLoader for Everything {
//!     fn load(&mut self, capability: &Capability) -> Result<LoadedCapability> {
//!         Ok(LoadedCapability { name: capability.name.clone(), version: None })
//!     }
//! }
//!
//! let profile = builtin::load("ml-project").unwrap();
//! let mut ui = MockUI::new();
//! let report = run_verification(&profile, &mut Everything, &mut ui);
//!
//! assert!(report.is_ready());
//! assert_eq!(ui.successes().len(), 4);
//! ```

pub mod report;
pub mod state;

pub use report::{GroupReport, VerificationReport};
pub use state::VerificationState;

use crate::capability::{CapabilityLoader, CapabilityResult, LoadedCapability};
use crate::error::DevcheckError;
use crate::profile::{Capability, CapabilityGroup, Profile};
use crate::ui::UserInterface;

/// The capability that stopped a run.
#[derive(Debug, Clone)]
struct Missing {
    name: String,
    reason: String,
    install_hint: Option<String>,
}

impl Missing {
    fn new(capability: &Capability, err: &DevcheckError) -> Self {
        let reason = match err {
            DevcheckError::CapabilityUnavailable { reason, .. } => reason.clone(),
            other => other.to_string(),
        };
        Self {
            name: capability.name.clone(),
            reason,
            install_hint: capability.install_hint(),
        }
    }
}

/// Verify every group of `profile`, reporting through `ui`.
///
/// Never fails: an unavailable capability is caught here and reported as a
/// single failure line.
pub fn run_verification(
    profile: &Profile,
    loader: &mut dyn CapabilityLoader,
    ui: &mut dyn UserInterface,
) -> VerificationReport {
    let mut report = VerificationReport {
        profile: profile.name.clone(),
        ..Default::default()
    };

    match check_groups(profile, loader, ui, &mut report) {
        Ok(()) => {
            report.state = std::mem::take(&mut report.state).complete();
            ui.message("");
            ui.banner(&profile.ready);
            for hint in &profile.hints {
                ui.hint(hint);
            }
        }
        Err(missing) => {
            report.state = std::mem::take(&mut report.state).fail(&missing.name);
            tracing::debug!("{} unavailable: {}", missing.name, missing.reason);
            ui.error(&format!("Missing dependency: {}", missing.name));
            if ui.output_mode().shows_details() {
                ui.detail(&missing.reason);
                if let Some(hint) = &missing.install_hint {
                    ui.detail(&format!("Install with: {}", hint));
                }
            }
        }
    }

    report
}

fn check_groups(
    profile: &Profile,
    loader: &mut dyn CapabilityLoader,
    ui: &mut dyn UserInterface,
    report: &mut VerificationReport,
) -> Result<(), Missing> {
    for (index, group) in profile.groups.iter().enumerate() {
        report.state = std::mem::take(&mut report.state).enter(index);
        report.groups.push(GroupReport {
            label: group.label.clone(),
            results: Vec::new(),
        });

        let mut spinner = ui.start_spinner(&format!("Checking {}...", group.label));
        let outcome = match report.groups.last_mut() {
            Some(group_report) => check_group(group, loader, &mut group_report.results),
            None => Ok(Vec::new()),
        };
        spinner.finish();

        let loaded = outcome?;
        ui.success(&format!("{}: OK", group.label));
        if ui.output_mode().shows_details() {
            for capability in &loaded {
                let version = capability.version.as_deref().unwrap_or("(no version)");
                ui.detail(&format!("{} {}", capability.name, version));
            }
        }
    }

    Ok(())
}

/// Load every member of `group`, stopping at the first failure.
fn check_group(
    group: &CapabilityGroup,
    loader: &mut dyn CapabilityLoader,
    results: &mut Vec<CapabilityResult>,
) -> Result<Vec<LoadedCapability>, Missing> {
    group
        .capabilities
        .iter()
        .map(|capability| match loader.load(capability) {
            Ok(loaded) => {
                results.push(CapabilityResult::loaded(
                    &capability.name,
                    loaded.version.clone(),
                ));
                Ok(loaded)
            }
            Err(err) => {
                let missing = Missing::new(capability, &err);
                results.push(CapabilityResult::unavailable(
                    &capability.name,
                    missing.reason.clone(),
                ));
                Err(missing)
            }
        })
        .collect()
}
