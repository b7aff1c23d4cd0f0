//! Verify command implementation.
//!
//! The `devcheck verify` command (and bare `devcheck`) checks that every
//! capability group of the selected profile loads.

use std::path::{Path, PathBuf};

use crate::capability::{CapabilityLoader, PythonImportLoader, PythonProbe};
use crate::cli::args::VerifyArgs;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::verifier::run_verification;

use super::dispatcher::{Command, CommandResult};
use super::{resolve_profile, PROFILE_ERROR_EXIT};

/// The verify command implementation.
pub struct VerifyCommand {
    project_root: PathBuf,
    python: Option<PathBuf>,
    args: VerifyArgs,
}

impl VerifyCommand {
    /// Create a new verify command.
    pub fn new(project_root: &Path, python: Option<&Path>, args: VerifyArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            python: python.map(Path::to_path_buf),
            args,
        }
    }

    /// Run verification with a specific loader.
    pub fn execute_with_loader(
        &self,
        loader: &mut dyn CapabilityLoader,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let Some((profile, source)) = resolve_profile(&self.project_root, &self.args.profile, ui)?
        else {
            return Ok(CommandResult::failure(PROFILE_ERROR_EXIT));
        };
        tracing::debug!("Verifying profile '{}' from {}", profile.name, source);

        let report = run_verification(&profile, loader, ui);

        if !report.is_ready() && self.args.strict {
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }
}

impl Command for VerifyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let probe = PythonProbe::run(self.python.as_deref());
        let mut loader = PythonImportLoader::new(&probe);
        self.execute_with_loader(&mut loader, ui)
    }
}
