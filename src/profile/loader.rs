//! Profile discovery and loading.
//!
//! Priority order (first hit wins):
//! 1. An explicit `--manifest` file
//! 2. An explicit `--profile` built-in name
//! 3. Project file `.devcheck.yml`
//! 4. Devcontainer file `.devcontainer/devcheck.yml`
//! 5. The default built-in profile

use crate::error::{DevcheckError, Result};
use crate::profile::builtin;
use crate::profile::schema::Profile;
use crate::profile::validator::ensure_valid;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Project-relative locations searched for a profile file, in order.
pub const PROFILE_FILES: &[&str] = &[".devcheck.yml", ".devcontainer/devcheck.yml"];

/// Where a profile comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    /// A YAML file on disk.
    File(PathBuf),
    /// A profile embedded in the binary.
    Builtin(String),
}

impl fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Builtin(name) => write!(f, "built-in '{}'", name),
        }
    }
}

/// Decide which profile to use.
pub fn discover(project_root: &Path, manifest: Option<&Path>, profile: Option<&str>) -> ProfileSource {
    if let Some(path) = manifest {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_root.join(path)
        };
        return ProfileSource::File(path);
    }

    if let Some(name) = profile {
        return ProfileSource::Builtin(name.to_string());
    }

    for candidate in PROFILE_FILES {
        let path = project_root.join(candidate);
        if path.is_file() {
            return ProfileSource::File(path);
        }
    }

    ProfileSource::Builtin(builtin::DEFAULT_PROFILE.to_string())
}

/// Load and validate a profile from its source.
pub fn load_profile(source: &ProfileSource) -> Result<Profile> {
    tracing::debug!("Loading profile from {}", source);

    let profile = match source {
        ProfileSource::File(path) => load_profile_file(path)?,
        ProfileSource::Builtin(name) => builtin::load(name)?,
    };

    ensure_valid(&profile)?;
    Ok(profile)
}

/// Parse a profile file without validating it.
pub fn load_profile_file(path: &Path) -> Result<Profile> {
    if !path.is_file() {
        return Err(DevcheckError::ProfileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| DevcheckError::ProfileParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_yaml::from_str(&content).map_err(|e| DevcheckError::ProfileParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
