//! List command implementation.
//!
//! The `devcheck list` command shows the groups and capabilities that
//! `verify` would check, without loading anything.

use std::path::{Path, PathBuf};

use crate::capability::PythonProbe;
use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::profile::{Profile, ProfileSource};
use crate::ui::{should_use_colors, DevcheckTheme};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::{resolve_profile, PROFILE_ERROR_EXIT};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    python: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, python: Option<&Path>, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            python: python.map(Path::to_path_buf),
            args,
        }
    }

    /// List the resolved profile, describing `probe` as the interpreter.
    pub fn execute_with_probe(
        &self,
        probe: &PythonProbe,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let Some((profile, source)) = resolve_profile(&self.project_root, &self.args.profile, ui)?
        else {
            return Ok(CommandResult::failure(PROFILE_ERROR_EXIT));
        };

        if self.args.json {
            ui.output(&render_json(&profile)?);
        } else {
            render_text(&profile, &source, probe, ui);
        }

        Ok(CommandResult::success())
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let probe = PythonProbe::run(self.python.as_deref());
        self.execute_with_probe(&probe, ui)
    }
}

/// Serialize a profile for `--json`.
pub fn render_json(profile: &Profile) -> Result<String> {
    serde_json::to_string_pretty(profile).map_err(|e| anyhow::Error::from(e).into())
}

fn render_text(
    profile: &Profile,
    source: &ProfileSource,
    probe: &PythonProbe,
    ui: &mut dyn UserInterface,
) {
    let theme = if should_use_colors() {
        DevcheckTheme::new()
    } else {
        DevcheckTheme::plain()
    };

    ui.output(&format!(
        "{} {}",
        theme.key.apply_to(&profile.name),
        theme.dim.apply_to(format!("({})", source))
    ));
    if let Some(description) = &profile.description {
        ui.output(&format!("  {}", theme.dim.apply_to(description)));
    }

    let interpreter = probe
        .interpreter()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| format!("not found ({})", probe.searched_summary()));
    ui.output(&format!("  {} {}", theme.dim.apply_to("Interpreter:"), interpreter));
    ui.output(&format!(
        "  {} {} in {} groups",
        theme.dim.apply_to("Checks:"),
        profile.capability_count(),
        profile.groups.len()
    ));
    ui.output("");

    let width = profile
        .capabilities()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0);

    for group in &profile.groups {
        ui.output(&format!("  {}", theme.key.apply_to(&group.label)));
        for capability in &group.capabilities {
            let mut line = format!("    {:<width$}", capability.name, width = width);
            if capability.module() != capability.name {
                line.push_str(&format!(" {}", theme.dim.apply_to(format!("[{}]", capability.module()))));
            }
            if let Some(description) = &capability.description {
                line.push_str(&format!("  {}", theme.dim.apply_to(description)));
            }
            ui.output(line.trim_end());
        }
    }
}
