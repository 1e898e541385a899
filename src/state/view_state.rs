//! Panel visibility state machine.

use std::fmt;

/// Which panel region of the window is visible.
///
/// Being a two-variant enum, exactly one region is visible at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowViewState {
    /// Welcome region visible, tool panel hidden
    #[default]
    Welcome,
    /// Tool panel visible, welcome region hidden
    ToolPanelActive,
}

/// Result of applying a transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The state changed
    Changed { from: WindowViewState, to: WindowViewState },
    /// The state already satisfied the request
    Unchanged(WindowViewState),
}

impl WindowViewState {
    pub fn welcome_visible(self) -> bool {
        self == WindowViewState::Welcome
    }

    pub fn tool_panel_visible(self) -> bool {
        self == WindowViewState::ToolPanelActive
    }

    /// Shows the tool panel. Idempotent.
    pub fn activate_tool_panel(&mut self) -> Transition {
        self.move_to(WindowViewState::ToolPanelActive)
    }

    /// Returns to the welcome region. Idempotent.
    pub fn close_tool_panel(&mut self) -> Transition {
        self.move_to(WindowViewState::Welcome)
    }

    fn move_to(&mut self, target: WindowViewState) -> Transition {
        if *self == target {
            return Transition::Unchanged(target);
        }
        let from = std::mem::replace(self, target);
        Transition::Changed { from, to: target }
    }
}

impl fmt::Display for WindowViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowViewState::Welcome => f.write_str("Welcome"),
            WindowViewState::ToolPanelActive => f.write_str("Tool Panel"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_welcome() {
        let state = WindowViewState::default();
        assert!(state.welcome_visible());
        assert!(!state.tool_panel_visible());
    }

    #[test]
    fn test_activate_is_idempotent() {
        let mut state = WindowViewState::default();

        assert_eq!(
            state.activate_tool_panel(),
            Transition::Changed {
                from: WindowViewState::Welcome,
                to: WindowViewState::ToolPanelActive
            }
        );
        assert_eq!(
            state.activate_tool_panel(),
            Transition::Unchanged(WindowViewState::ToolPanelActive)
        );
        assert!(state.tool_panel_visible());
        assert!(!state.welcome_visible());
    }

    #[test]
    fn test_close_returns_to_welcome() {
        let mut state = WindowViewState::ToolPanelActive;
        assert!(matches!(state.close_tool_panel(), Transition::Changed { .. }));
        assert_eq!(state, WindowViewState::Welcome);
        assert_eq!(
            state.close_tool_panel(),
            Transition::Unchanged(WindowViewState::Welcome)
        );
    }
}
