//! User-triggerable window actions.

use std::fmt;

use crate::features::FeatureKind;

/// A single user-initiated event the controller can handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellAction {
    LaunchToolPanel,
    CloseToolPanel,
    ShowChat,
    ShowSettings,
    ShowSecurity,
    ShowAuditLogs,
}

impl ShellAction {
    /// Every action, in button order.
    pub const ALL: [ShellAction; 6] = [
        ShellAction::LaunchToolPanel,
        ShellAction::CloseToolPanel,
        ShellAction::ShowChat,
        ShellAction::ShowSettings,
        ShellAction::ShowSecurity,
        ShellAction::ShowAuditLogs,
    ];

    /// Short machine name, used as the `action` field in log entries.
    pub fn name(self) -> &'static str {
        match self {
            ShellAction::LaunchToolPanel => "launch_tool_panel",
            ShellAction::CloseToolPanel => "close_tool_panel",
            ShellAction::ShowChat => "show_chat",
            ShellAction::ShowSettings => "show_settings",
            ShellAction::ShowSecurity => "show_security",
            ShellAction::ShowAuditLogs => "show_audit_logs",
        }
    }

    /// Label used on buttons and in error status text.
    pub fn label(self) -> &'static str {
        match self {
            ShellAction::LaunchToolPanel => "Launch Tool Panel",
            ShellAction::CloseToolPanel => "Close Tool Panel",
            ShellAction::ShowChat => "AI Chat",
            ShellAction::ShowSettings => "Settings",
            ShellAction::ShowSecurity => "Security Status",
            ShellAction::ShowAuditLogs => "Audit Logs",
        }
    }

    /// Status text after the action succeeds.
    pub fn success_status(self) -> &'static str {
        match self {
            ShellAction::LaunchToolPanel => "Tool panel loaded successfully (Demo Mode)",
            ShellAction::CloseToolPanel => "Tool panel closed",
            ShellAction::ShowChat => "AI Chat interface opened",
            ShellAction::ShowSettings => "Settings interface opened",
            ShellAction::ShowSecurity => "Security status displayed",
            ShellAction::ShowAuditLogs => "Audit logs displayed",
        }
    }

    /// Status text when the action succeeds without changing the view.
    ///
    /// `None` means the regular success text applies.
    pub fn unchanged_status(self) -> Option<&'static str> {
        match self {
            ShellAction::CloseToolPanel => Some("Tool panel is not open"),
            _ => None,
        }
    }

    /// Status text after the action fails.
    pub fn error_status(self, detail: &dyn fmt::Display) -> String {
        format!("Error in {}: {}", self.label(), detail)
    }

    /// The feature whose summary this action presents, if any.
    pub fn feature(self) -> Option<FeatureKind> {
        match self {
            ShellAction::LaunchToolPanel => Some(FeatureKind::ToolPanel),
            ShellAction::CloseToolPanel => None,
            ShellAction::ShowChat => Some(FeatureKind::Chat),
            ShellAction::ShowSettings => Some(FeatureKind::Settings),
            ShellAction::ShowSecurity => Some(FeatureKind::Security),
            ShellAction::ShowAuditLogs => Some(FeatureKind::AuditLogs),
        }
    }
}

impl fmt::Display for ShellAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_names_action() {
        for action in ShellAction::ALL {
            let status = action.error_status(&"boom");
            assert!(status.contains(action.label()));
            assert!(status.contains("boom"));
        }
    }

    #[test]
    fn test_relaunch_keeps_success_text() {
        assert_eq!(ShellAction::LaunchToolPanel.unchanged_status(), None);
        assert!(ShellAction::CloseToolPanel.unchanged_status().is_some());
    }

    #[test]
    fn test_only_close_lacks_feature() {
        let without: Vec<_> = ShellAction::ALL
            .into_iter()
            .filter(|a| a.feature().is_none())
            .collect();
        assert_eq!(without, vec![ShellAction::CloseToolPanel]);
    }
}
