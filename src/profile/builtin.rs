//! Built-in profiles embedded at compile time.

use crate::error::{DevcheckError, Result};
use crate::profile::schema::Profile;
use include_dir::{include_dir, Dir};

/// Embedded profiles directory.
static PROFILES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates/profiles");

/// Name of the profile used when nothing else is configured.
pub const DEFAULT_PROFILE: &str = "ml-project";

/// Names of all built-in profiles, sorted.
pub fn names() -> Vec<String> {
    let mut names: Vec<String> = PROFILES_DIR
        .files()
        .filter(|f| is_yaml(f.path()))
        .filter_map(|f| f.path().file_stem())
        .map(|stem| stem.to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

/// Load a built-in profile by name.
pub fn load(name: &str) -> Result<Profile> {
    let file = ["yml", "yaml"]
        .iter()
        .find_map(|ext| PROFILES_DIR.get_file(format!("{}.{}", name, ext)))
        .ok_or_else(|| DevcheckError::UnknownProfile {
            name: name.to_string(),
        })?;

    let content = file
        .contents_utf8()
        .ok_or_else(|| DevcheckError::ProfileParseError {
            path: file.path().to_path_buf(),
            message: "Invalid UTF-8".to_string(),
        })?;

    serde_yaml::from_str(content).map_err(|e| DevcheckError::ProfileParseError {
        path: file.path().to_path_buf(),
        message: e.to_string(),
    })
}

fn is_yaml(path: &std::path::Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}
