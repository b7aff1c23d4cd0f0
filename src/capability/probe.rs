//! Interpreter probe for locating the Python that owns the capabilities.
//!
//! Containers rarely agree on where Python lives: a virtualenv, a conda
//! prefix, the system `python3`, or a pyenv shim that is not on `PATH` in a
//! non-login shell. The probe walks those locations in a fixed order and
//! keeps the first executable it finds.
//!
//! # Example
//!
//! ```no_run
//! use devcheck::capability::probe::PythonProbe;
//!
//! let probe = PythonProbe::run(None);
//! match probe.interpreter() {
//!     Some(python) => println!("Using {}", python.display()),
//!     None => println!("No Python found"),
//! }
//! ```

use crate::error::{DevcheckError, Result};
use std::env::VarError;
use std::path::{Path, PathBuf};

/// Interpreter names looked up on `PATH`, in order.
const INTERPRETER_NAMES: &[&str] = &["python3", "python"];

/// Environment roots that carry their own interpreter.
const ENV_ROOTS: &[&str] = &["VIRTUAL_ENV", "CONDA_PREFIX"];

/// Result of probing the environment for a Python interpreter.
#[derive(Debug, Clone, Default)]
pub struct PythonProbe {
    /// The interpreter that will run imports.
    interpreter: Option<PathBuf>,
    /// Every candidate path that was considered, in order.
    searched: Vec<PathBuf>,
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command, whose behavior varies across systems.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(executable_name(tool));
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

fn executable_name(tool: &str) -> String {
    format!("{}{}", tool, std::env::consts::EXE_SUFFIX)
}

/// Directory holding executables inside a virtualenv or conda prefix.
fn env_bin_dir(root: &Path) -> PathBuf {
    if cfg!(windows) {
        root.join("Scripts")
    } else {
        root.join("bin")
    }
}

fn is_usable(path: &Path) -> bool {
    path.is_file() && is_executable(path)
}

impl PythonProbe {
    /// Probe using actual environment variables and filesystem.
    pub fn run(explicit: Option<&Path>) -> Self {
        Self::run_with_env(explicit, |key: &str| std::env::var(key))
    }

    /// Probe with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn run_with_env<F>(explicit: Option<&Path>, env_fn: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let path_entries: Vec<PathBuf> = env_fn("PATH")
            .map(|p| std::env::split_paths(&p).collect())
            .unwrap_or_default();

        // An explicit choice is final: a typo should not silently fall back
        // to some other interpreter.
        if let Some(explicit) = explicit {
            return Self::resolve_explicit(explicit, &path_entries);
        }

        let mut searched = Vec::new();

        for var in ENV_ROOTS {
            if let Ok(root) = env_fn(var) {
                if root.is_empty() {
                    continue;
                }
                let candidate = env_bin_dir(Path::new(&root)).join(executable_name("python"));
                searched.push(candidate.clone());
                if is_usable(&candidate) {
                    return Self::found(candidate, searched);
                }
            }
        }

        for name in INTERPRETER_NAMES {
            for dir in &path_entries {
                searched.push(dir.join(executable_name(name)));
            }
            if let Some(found) = resolve_tool_path(name, &path_entries) {
                return Self::found(found, searched);
            }
        }

        for dir in manager_dirs(&env_fn) {
            for name in INTERPRETER_NAMES {
                let candidate = dir.join(executable_name(name));
                searched.push(candidate.clone());
                if is_usable(&candidate) {
                    return Self::found(candidate, searched);
                }
            }
        }

        tracing::warn!("No Python interpreter found");
        Self {
            interpreter: None,
            searched,
        }
    }

    /// Create a probe result for a known interpreter.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            searched: vec![path.clone()],
            interpreter: Some(path),
        }
    }

    fn resolve_explicit(explicit: &Path, path_entries: &[PathBuf]) -> Self {
        let is_bare_name = explicit.components().count() == 1 && !explicit.is_absolute();

        if is_bare_name {
            let name = explicit.to_string_lossy();
            let searched = path_entries
                .iter()
                .map(|dir| dir.join(executable_name(&name)))
                .collect();
            return Self {
                interpreter: resolve_tool_path(&name, path_entries),
                searched,
            };
        }

        Self {
            interpreter: is_usable(explicit).then(|| explicit.to_path_buf()),
            searched: vec![explicit.to_path_buf()],
        }
    }

    fn found(interpreter: PathBuf, searched: Vec<PathBuf>) -> Self {
        tracing::debug!("Using Python interpreter at {}", interpreter.display());
        Self {
            interpreter: Some(interpreter),
            searched,
        }
    }

    /// The interpreter, if one was found.
    pub fn interpreter(&self) -> Option<&Path> {
        self.interpreter.as_deref()
    }

    /// Every candidate path considered, in order.
    pub fn searched(&self) -> &[PathBuf] {
        &self.searched
    }

    /// The interpreter, or an error listing what was searched.
    pub fn require(&self) -> Result<&Path> {
        self.interpreter()
            .ok_or_else(|| DevcheckError::InterpreterNotFound {
                searched: self.searched_summary(),
            })
    }

    /// Compact description of the search for error messages.
    pub fn searched_summary(&self) -> String {
        if self.searched.is_empty() {
            return "PATH is empty".to_string();
        }
        self.searched
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Version manager locations that are often missing from a non-login PATH.
fn manager_dirs<F>(env_fn: &F) -> Vec<PathBuf>
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    let home = env_fn("HOME").ok().filter(|h| !h.is_empty()).map(PathBuf::from);
    let mut dirs = Vec::new();

    match env_fn("PYENV_ROOT") {
        Ok(root) if !root.is_empty() => dirs.push(PathBuf::from(root).join("shims")),
        _ => {
            if let Some(home) = &home {
                dirs.push(home.join(".pyenv").join("shims"));
            }
        }
    }

    if let Some(home) = &home {
        dirs.push(home.join(".local").join("bin"));
    }

    dirs
}
