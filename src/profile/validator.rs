//! Profile validation rules.
//!
//! This module validates profiles before any probe runs:
//! - The profile has a name and at least one group
//! - Every group has a label and at least one capability
//! - Capability names are unique across the profile
//! - Module paths are dotted Python identifiers

use crate::error::{DevcheckError, Result};
use crate::profile::schema::Profile;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

fn module_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$")
            .expect("module pattern is valid")
    })
}

/// Validate a profile and return all errors.
///
/// All errors are collected rather than stopping at the first one.
pub fn validate_profile(profile: &Profile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if profile.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "missing-name",
            "Profile name must not be empty".to_string(),
        ));
    }

    if profile.groups.is_empty() {
        errors.push(ValidationError::new(
            "no-groups",
            format!("Profile '{}' defines no groups", profile.name),
        ));
    }

    let mut seen = HashSet::new();
    for (index, group) in profile.groups.iter().enumerate() {
        if group.label.trim().is_empty() {
            errors.push(ValidationError::new(
                "missing-label",
                format!("Group #{} has an empty label", index + 1),
            ));
        }

        if group.capabilities.is_empty() {
            errors.push(ValidationError::new(
                "empty-group",
                format!("Group '{}' has no capabilities", group.label),
            ));
        }

        for cap in &group.capabilities {
            if !seen.insert(cap.name.as_str()) {
                errors.push(ValidationError::new(
                    "duplicate-capability",
                    format!("Capability '{}' is listed more than once", cap.name),
                ));
            }

            if !module_pattern().is_match(cap.module()) {
                errors.push(ValidationError::new(
                    "invalid-module",
                    format!(
                        "Capability '{}' has invalid module path '{}'",
                        cap.name,
                        cap.module()
                    ),
                ));
            }
        }
    }

    errors
}

/// Validate and convert errors into a single [`DevcheckError`].
pub fn ensure_valid(profile: &Profile) -> Result<()> {
    let errors = validate_profile(profile);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(DevcheckError::ProfileValidationError { message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::schema::{Capability, CapabilityGroup};

    fn profile_with(groups: Vec<CapabilityGroup>) -> Profile {
        Profile {
            name: "test".to_string(),
            description: None,
            ready: "ready".to_string(),
            hints: vec![],
            groups,
        }
    }

    fn group(label: &str, names: &[&str]) -> CapabilityGroup {
        CapabilityGroup {
            label: label.to_string(),
            capabilities: names.iter().map(|n| Capability::new(*n)).collect(),
        }
    }

    #[test]
    fn valid_profile_has_no_errors() {
        let profile = profile_with(vec![group("Core", &["pandas", "numpy"])]);
        assert!(validate_profile(&profile).is_empty());
        assert!(ensure_valid(&profile).is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut profile = profile_with(vec![group("Core", &["pandas"])]);
        profile.name = "  ".to_string();
        let errors = validate_profile(&profile);
        assert_eq!(errors[0].rule, "missing-name");
    }

    #[test]
    fn no_groups_is_rejected() {
        let errors = validate_profile(&profile_with(vec![]));
        assert!(errors.iter().any(|e| e.rule == "no-groups"));
    }

    #[test]
    fn empty_group_is_rejected() {
        let errors = validate_profile(&profile_with(vec![group("Empty", &[])]));
        assert!(errors.iter().any(|e| e.rule == "empty-group"));
    }

    #[test]
    fn blank_label_is_rejected() {
        let errors = validate_profile(&profile_with(vec![group("", &["numpy"])]));
        assert!(errors.iter().any(|e| e.rule == "missing-label"));
    }

    #[test]
    fn duplicate_names_across_groups_are_rejected() {
        let profile = profile_with(vec![group("A", &["numpy"]), group("B", &["numpy"])]);
        let errors = validate_profile(&profile);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "duplicate-capability");
    }

    #[test]
    fn dotted_module_paths_are_accepted() {
        let mut cap = Capability::new("sklearn-metrics");
        cap.module = Some("sklearn.metrics".to_string());
        let profile = profile_with(vec![CapabilityGroup {
            label: "ML".to_string(),
            capabilities: vec![cap],
        }]);
        assert!(validate_profile(&profile).is_empty());
    }

    #[test]
    fn invalid_module_paths_are_rejected() {
        for bad in ["opencv-python", "1numpy", "os; import shutil", "a..b", ""] {
            let mut cap = Capability::new("x");
            cap.module = Some(bad.to_string());
            let profile = profile_with(vec![CapabilityGroup {
                label: "G".to_string(),
                capabilities: vec![cap],
            }]);
            let errors = validate_profile(&profile);
            assert!(
                errors.iter().any(|e| e.rule == "invalid-module"),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn ensure_valid_joins_messages() {
        let profile = profile_with(vec![group("", &[])]);
        let err = ensure_valid(&profile).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("empty label"));
        assert!(msg.contains("no capabilities"));
    }
}
