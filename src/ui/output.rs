//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also show versions, failure reasons and install hints.
    Verbose,
    /// Show every status line.
    #[default]
    Normal,
    /// Show only the final outcome.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows per-capability details.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows intermediate status lines.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
