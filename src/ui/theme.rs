//! Visual theme and styling.

use console::Style;

use super::icons::StatusKind;

/// devcheck's visual theme.
#[derive(Debug, Clone)]
pub struct DevcheckTheme {
    /// Style for group success lines (green).
    pub success: Style,
    /// Style for the missing-dependency line (red bold).
    pub error: Style,
    /// Style for the ready banner (bold magenta).
    pub banner: Style,
    /// Style for hints after the banner (magenta dim).
    pub hint: Style,
    /// Style for verbose detail lines (dim).
    pub dim: Style,
    /// Style for key labels in `list` output (bold).
    pub key: Style,
}

impl Default for DevcheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DevcheckTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            banner: Style::new().bold().magenta(),
            hint: Style::new().magenta().dim(),
            dim: Style::new().dim(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            banner: Style::new(),
            hint: Style::new(),
            dim: Style::new(),
            key: Style::new(),
        }
    }

    /// Format a success line (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{} {}", StatusKind::Success.icon(), self.success.apply_to(msg))
    }

    /// Format a failure line (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", StatusKind::Failed.icon(), self.error.apply_to(msg))
    }

    /// Format the ready banner.
    pub fn format_banner(&self, msg: &str) -> String {
        format!("{} {}", StatusKind::Ready.icon(), self.banner.apply_to(msg))
    }

    /// Format an indented detail line.
    pub fn format_detail(&self, msg: &str) -> String {
        format!("   {}", self.dim.apply_to(msg))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
