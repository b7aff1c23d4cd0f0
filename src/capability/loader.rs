//! Capability loaders.
//!
//! [`CapabilityLoader`] is the seam between the verifier and the outside
//! world. [`PythonImportLoader`] is the production implementation: it asks
//! the container's interpreter to import each module in a child process.

use crate::capability::probe::PythonProbe;
use crate::error::{DevcheckError, Result};
use crate::profile::Capability;
use crate::shell::{execute_program, CommandOptions, CommandResult};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Imports `sys.argv[1]` and prints its `__version__` after
/// [`VERSION_MARKER`] (empty if absent).
const IMPORT_SNIPPET: &str = "\
import importlib, sys
module = importlib.import_module(sys.argv[1])
version = getattr(module, '__version__', None)
print('__devcheck_version__=' + (version if isinstance(version, str) else ''))
";

/// Prefix of the line carrying the version. Modules may print their own
/// output while importing; only this line is read.
const VERSION_MARKER: &str = "__devcheck_version__=";

/// A capability that loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCapability {
    /// Capability name.
    pub name: String,
    /// Version reported by the library.
    pub version: Option<String>,
}

/// Attempts to load capabilities.
///
/// Any `Err` means the capability is unavailable.
pub trait CapabilityLoader {
    /// Try to load one capability.
    fn load(&mut self, capability: &Capability) -> Result<LoadedCapability>;
}

/// Loads capabilities by importing them with a Python interpreter.
///
/// Caches results per module so the same module is only imported once per
/// loader.
pub struct PythonImportLoader {
    probe: PythonProbe,
    options: CommandOptions,
    cache: HashMap<String, std::result::Result<Option<String>, String>>,
}

impl PythonImportLoader {
    /// Create a loader from a probe result.
    pub fn new(probe: &PythonProbe) -> Self {
        let mut options = CommandOptions::default();
        options
            .env
            .insert("PYTHONDONTWRITEBYTECODE".to_string(), "1".to_string());

        Self {
            probe: probe.clone(),
            options,
            cache: HashMap::new(),
        }
    }

    /// The interpreter this loader runs, if any.
    pub fn interpreter(&self) -> Option<&Path> {
        self.probe.interpreter()
    }

    fn import(&self, module: &str) -> Result<std::result::Result<Option<String>, String>> {
        let python = self.probe.require()?;

        tracing::debug!("Importing {} with {}", module, python.display());
        let result = execute_program(python, &["-c", IMPORT_SNIPPET, module], &self.options)?;
        tracing::debug!(
            "Import of {} finished in {:?} (exit {:?})",
            module,
            result.duration,
            result.exit_code
        );

        if result.success {
            Ok(Ok(reported_version(&result.stdout)))
        } else {
            Ok(Err(failure_reason(&result)))
        }
    }
}

impl CapabilityLoader for PythonImportLoader {
    fn load(&mut self, capability: &Capability) -> Result<LoadedCapability> {
        let module = capability.module().to_string();

        let outcome = match self.cache.get(&module) {
            Some(cached) => cached.clone(),
            None => {
                let outcome = self.import(&module)?;
                self.cache.insert(module, outcome.clone());
                outcome
            }
        };

        match outcome {
            Ok(version) => Ok(LoadedCapability {
                name: capability.name.clone(),
                version,
            }),
            Err(reason) => Err(DevcheckError::CapabilityUnavailable {
                name: capability.name.clone(),
                reason,
            }),
        }
    }
}

/// The version from the marker line of a successful import.
fn reported_version(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .rev()
        .find_map(|line| line.trim_end().strip_prefix(VERSION_MARKER))
        .map(str::trim)
        .filter(|version| !version.is_empty())
        .map(String::from)
}

fn exception_line() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<kind>[A-Za-z_][A-Za-z0-9_.]*(?:Error|Exception)): (?P<message>.+)$")
            .expect("exception pattern is valid")
    })
}

/// Extract a one-line reason from a failed import.
///
/// Uses the last `SomeError: message` line of the traceback. Import
/// errors report just the message (`No module named 'x'`); other exception
/// types keep their name so crashes at import time are recognisable.
pub fn failure_reason(result: &CommandResult) -> String {
    let last_exception = result
        .stderr
        .lines()
        .rev()
        .find_map(|line| exception_line().captures(line.trim_end()));

    if let Some(caps) = last_exception {
        let kind = &caps["kind"];
        let message = &caps["message"];
        return match kind {
            "ModuleNotFoundError" | "ImportError" => message.to_string(),
            _ => format!("{}: {}", kind, message),
        };
    }

    if let Some(line) = result.stderr.lines().rev().find(|l| !l.trim().is_empty()) {
        return line.trim().to_string();
    }

    match result.exit_code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn failed(stderr: &str, code: Option<i32>) -> CommandResult {
        CommandResult::failure(code, String::new(), stderr.to_string(), Duration::ZERO)
    }

    #[test]
    fn reason_from_module_not_found() {
        let stderr = "Traceback (most recent call last):\n  File \"<string>\", line 2, in <module>\n  File \"/usr/lib/python3.12/importlib/__init__.py\", line 90, in import_module\nModuleNotFoundError: No module named 'pandas'\n";
        assert_eq!(failure_reason(&failed(stderr, Some(1))), "No module named 'pandas'");
    }

    #[test]
    fn reason_keeps_kind_for_other_exceptions() {
        let stderr = "Traceback (most recent call last):\nOSError: libtesseract.so.5: cannot open shared object file\n";
        assert_eq!(
            failure_reason(&failed(stderr, Some(1))),
            "OSError: libtesseract.so.5: cannot open shared object file"
        );
    }

    #[test]
    fn reason_uses_last_exception_in_chain() {
        let stderr = "ImportError: numpy.core.multiarray failed to import\n\nDuring handling of the above exception, another exception occurred:\n\nModuleNotFoundError: No module named 'numpy.core._multiarray_umath'\n";
        assert_eq!(
            failure_reason(&failed(stderr, Some(1))),
            "No module named 'numpy.core._multiarray_umath'"
        );
    }

    #[test]
    fn reason_falls_back_to_last_line() {
        assert_eq!(
            failure_reason(&failed("Segmentation fault\n\n", Some(139))),
            "Segmentation fault"
        );
    }

    #[test]
    fn reason_falls_back_to_exit_code() {
        assert_eq!(failure_reason(&failed("", Some(2))), "exit code 2");
        assert_eq!(failure_reason(&failed("", None)), "terminated by signal");
    }

    #[test]
    fn version_is_read_from_marker_line_only() {
        assert_eq!(
            reported_version("Loading plugin...\nready\n__devcheck_version__=2.1.0\n").as_deref(),
            Some("2.1.0")
        );
        assert_eq!(reported_version("__devcheck_version__=\n"), None);
        assert_eq!(reported_version("1.0\n"), None);
    }

    #[test]
    fn unstartable_interpreter_reports_cause() {
        let mut loader = PythonImportLoader::new(&PythonProbe::from_path("/nonexistent/bin/python3"));
        let err = loader.load(&Capability::new("pandas")).unwrap_err();
        assert!(matches!(&err, DevcheckError::CommandFailed { message, .. } if !message.is_empty()));
        assert!(err
            .to_string()
            .starts_with("Failed to start /nonexistent/bin/python3: "));
    }

    #[test]
    fn loader_without_interpreter_reports_interpreter_missing() {
        let mut loader = PythonImportLoader::new(&PythonProbe::default());
        let err = loader.load(&Capability::new("pandas")).unwrap_err();
        assert!(matches!(err, DevcheckError::InterpreterNotFound { .. }));
    }

    #[cfg(unix)]
    mod with_fake_python {
        use super::*;
        use std::fs;
        use std::path::{Path, PathBuf};
        use tempfile::TempDir;

        /// A fake interpreter: modules listed in `missing` fail like a real
        /// `ModuleNotFoundError`, everything else "imports" at version 1.0.
        /// Every invocation is appended to `calls.log`.
        fn fake_python(dir: &Path, missing: &[&str]) -> PathBuf {
            fake_python_printing(dir, missing, "")
        }

        /// Like [`fake_python`], but successful imports print `banner`
        /// before the version line.
        fn fake_python_printing(dir: &Path, missing: &[&str], banner: &str) -> PathBuf {
            let script = format!(
                "#!/bin/sh\nmodule=\"$3\"\necho \"$module\" >> \"{log}\"\ncase \"$module\" in\n  {cases}) echo \"ModuleNotFoundError: No module named '$module'\" >&2; exit 1 ;;\nesac\nprintf '%s' \"{banner}\"\necho __devcheck_version__=1.0\n",
                log = dir.join("calls.log").display(),
                cases = if missing.is_empty() {
                    "__none__".to_string()
                } else {
                    missing.join("|")
                },
                banner = banner,
            );
            let path = dir.join("python3");
            fs::write(&path, script).unwrap();
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        fn calls(dir: &Path) -> Vec<String> {
            fs::read_to_string(dir.join("calls.log"))
                .unwrap_or_default()
                .lines()
                .map(String::from)
                .collect()
        }

        #[test]
        fn loads_available_module_with_version() {
            let temp = TempDir::new().unwrap();
            let python = fake_python(temp.path(), &[]);
            let mut loader = PythonImportLoader::new(&PythonProbe::from_path(python));

            let loaded = loader.load(&Capability::new("numpy")).unwrap();
            assert_eq!(loaded.name, "numpy");
            assert_eq!(loaded.version.as_deref(), Some("1.0"));
        }

        #[test]
        fn import_time_output_is_not_the_version() {
            let temp = TempDir::new().unwrap();
            let python = fake_python_printing(temp.path(), &[], "Loading plugin...\nimported\n");
            let mut loader = PythonImportLoader::new(&PythonProbe::from_path(python));

            let loaded = loader.load(&Capability::new("numpy")).unwrap();
            assert_eq!(loaded.version.as_deref(), Some("1.0"));
        }

        #[test]
        fn missing_module_is_unavailable() {
            let temp = TempDir::new().unwrap();
            let python = fake_python(temp.path(), &["torch"]);
            let mut loader = PythonImportLoader::new(&PythonProbe::from_path(python));

            let err = loader.load(&Capability::new("torch")).unwrap_err();
            match err {
                DevcheckError::CapabilityUnavailable { name, reason } => {
                    assert_eq!(name, "torch");
                    assert_eq!(reason, "No module named 'torch'");
                }
                other => panic!("Expected CapabilityUnavailable, got {:?}", other),
            }
        }

        #[test]
        fn imports_module_path_not_name() {
            let temp = TempDir::new().unwrap();
            let python = fake_python(temp.path(), &[]);
            let mut loader = PythonImportLoader::new(&PythonProbe::from_path(python));

            let cap = Capability {
                module: Some("cv2".to_string()),
                ..Capability::new("opencv")
            };
            let loaded = loader.load(&cap).unwrap();
            assert_eq!(loaded.name, "opencv");
            assert_eq!(calls(temp.path()), vec!["cv2"]);
        }

        #[test]
        fn results_are_cached_per_module() {
            let temp = TempDir::new().unwrap();
            let python = fake_python(temp.path(), &["pymysql"]);
            let mut loader = PythonImportLoader::new(&PythonProbe::from_path(python));

            assert!(loader.load(&Capability::new("pandas")).is_ok());
            assert!(loader.load(&Capability::new("pandas")).is_ok());
            assert!(loader.load(&Capability::new("pymysql")).is_err());
            assert!(loader.load(&Capability::new("pymysql")).is_err());
            assert_eq!(calls(temp.path()), vec!["pandas", "pymysql"]);
        }
    }
}
