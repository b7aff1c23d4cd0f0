//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, DevcheckTheme, OutputMode, ProgressSpinner, SpinnerHandle, UserInterface};

/// Terminal UI implementation writing to stdout.
pub struct TerminalUI {
    term: Term,
    theme: DevcheckTheme,
    mode: OutputMode,
    spinners: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    ///
    /// Spinners are only drawn when `spinners` is set and stdout is a TTY.
    pub fn new(mode: OutputMode, spinners: bool) -> Self {
        let theme = if should_use_colors() {
            DevcheckTheme::new()
        } else {
            DevcheckTheme::plain()
        };
        let term = Term::stdout();
        let spinners = spinners && term.is_term();

        Self {
            term,
            theme,
            mode,
            spinners,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn output(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn banner(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_banner(msg)).ok();
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.hint.apply_to(msg)).ok();
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.term, "{}", self.theme.format_detail(msg)).ok();
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.spinners && self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }
}

/// Create the UI for this run.
pub fn create_ui(spinners: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, spinners))
}
