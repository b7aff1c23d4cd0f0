//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`].

pub mod dispatcher;
pub mod list;
pub mod verify;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use crate::error::{DevcheckError, Result};
use crate::profile::{builtin, discover, load_profile, Profile, ProfileSource};
use crate::ui::UserInterface;
use std::path::Path;

use super::args::ProfileArgs;

/// Exit code for an unusable profile.
pub const PROFILE_ERROR_EXIT: i32 = 2;

/// Resolve and load the profile selected by `args`.
///
/// Profile errors are shown to the user and yield `None`; the caller exits
/// with [`PROFILE_ERROR_EXIT`]. Anything else propagates.
pub(crate) fn resolve_profile(
    project_root: &Path,
    args: &ProfileArgs,
    ui: &mut dyn UserInterface,
) -> Result<Option<(Profile, ProfileSource)>> {
    let source = discover(project_root, args.manifest.as_deref(), args.profile.as_deref());
    match load_profile(&source) {
        Ok(profile) => Ok(Some((profile, source))),
        Err(e) if e.is_profile_error() => {
            ui.error(&e.to_string());
            if matches!(e, DevcheckError::UnknownProfile { .. }) {
                ui.hint(&format!("Built-in profiles: {}", builtin::names().join(", ")));
            }
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
