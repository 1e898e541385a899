//! One-line status reflecting the last user action.

/// Status shown before any action has run.
pub const READY: &str = "Ready";

/// Outcome of the most recent action, overwritten on every action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    is_error: bool,
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusMessage {
    pub fn new() -> Self {
        Self {
            text: READY.to_string(),
            is_error: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the last action failed.
    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn set_success(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.is_error = false;
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.is_error = true;
    }
}
