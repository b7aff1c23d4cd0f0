//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal output
//! - [`MockUI`] for capturing output in tests
//! - Themes, status icons and spinners
//!
//! # Example
//!
//! ```
//! use devcheck::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.banner("Environment is ready!");
//! ```

pub mod icons;
pub mod mock;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::{MockSpinner, MockUI, UiEvent};
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DevcheckTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests. Implementations decide which
/// lines the current [`OutputMode`] shows.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Print a line the user explicitly asked for. Always shown.
    fn output(&mut self, msg: &str);

    /// Display a success line.
    fn success(&mut self, msg: &str);

    /// Display a failure line. Always shown.
    fn error(&mut self, msg: &str);

    /// Display the ready banner. Always shown.
    fn banner(&mut self, msg: &str);

    /// Display a follow-up hint.
    fn hint(&mut self, msg: &str);

    /// Display an indented detail line (verbose only).
    fn detail(&mut self, msg: &str);

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Stop and clear the spinner.
    fn finish(&mut self);
}
