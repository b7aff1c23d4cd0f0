//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures every line in
//! order for later assertion.
//!
//! # Example
//!
//! ```
//! use devcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Database connectors: OK");
//! ui.error("Missing dependency: torch");
//!
//! assert_eq!(ui.successes(), ["Database connectors: OK"]);
//! assert!(ui.has_error("torch"));
//! assert_eq!(
//!     ui.transcript(),
//!     "✅ Database connectors: OK\n❌ Missing dependency: torch"
//! );
//! ```

use super::{DevcheckTheme, OutputMode, SpinnerHandle, UserInterface};

/// A captured UI interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Message(String),
    Output(String),
    Success(String),
    Error(String),
    Banner(String),
    Hint(String),
    Detail(String),
}

/// Mock UI implementation for testing.
///
/// Records everything regardless of output mode; mode filtering is the
/// terminal's job.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    events: Vec<UiEvent>,
    spinners: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// All captured events in order.
    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    /// Get all captured output lines.
    pub fn outputs(&self) -> Vec<&str> {
        self.collect(|e| match e {
            UiEvent::Output(m) => Some(m),
            _ => None,
        })
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> Vec<&str> {
        self.collect(|e| match e {
            UiEvent::Success(m) => Some(m),
            _ => None,
        })
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> Vec<&str> {
        self.collect(|e| match e {
            UiEvent::Error(m) => Some(m),
            _ => None,
        })
    }

    /// Get all captured banners.
    pub fn banners(&self) -> Vec<&str> {
        self.collect(|e| match e {
            UiEvent::Banner(m) => Some(m),
            _ => None,
        })
    }

    /// Get all captured hints.
    pub fn hints(&self) -> Vec<&str> {
        self.collect(|e| match e {
            UiEvent::Hint(m) => Some(m),
            _ => None,
        })
    }

    /// Get all captured detail lines.
    pub fn details(&self) -> Vec<&str> {
        self.collect(|e| match e {
            UiEvent::Detail(m) => Some(m),
            _ => None,
        })
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors().iter().any(|m| m.contains(msg))
    }

    /// Render the captured events as plain terminal lines.
    pub fn transcript(&self) -> String {
        let theme = DevcheckTheme::plain();
        self.events
            .iter()
            .map(|e| match e {
                UiEvent::Message(m) | UiEvent::Output(m) | UiEvent::Hint(m) => m.clone(),
                UiEvent::Success(m) => theme.format_success(m),
                UiEvent::Error(m) => theme.format_error(m),
                UiEvent::Banner(m) => theme.format_banner(m),
                UiEvent::Detail(m) => theme.format_detail(m),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.events.clear();
        self.spinners.clear();
    }

    fn collect<'a, F>(&'a self, pick: F) -> Vec<&'a str>
    where
        F: Fn(&'a UiEvent) -> Option<&'a String>,
    {
        self.events.iter().filter_map(pick).map(String::as_str).collect()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.events.push(UiEvent::Message(msg.to_string()));
    }

    fn output(&mut self, msg: &str) {
        self.events.push(UiEvent::Output(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.events.push(UiEvent::Success(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.events.push(UiEvent::Error(msg.to_string()));
    }

    fn banner(&mut self, msg: &str) {
        self.events.push(UiEvent::Banner(msg.to_string()));
    }

    fn hint(&mut self, msg: &str) {
        self.events.push(UiEvent::Hint(msg.to_string()));
    }

    fn detail(&mut self, msg: &str) {
        self.events.push(UiEvent::Detail(msg.to_string()));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }
}

/// Mock spinner that records its lifecycle.
#[derive(Debug, Default)]
pub struct MockSpinner {
    messages: Vec<String>,
    finished: bool,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages set after creation.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Whether `finish` was called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}
