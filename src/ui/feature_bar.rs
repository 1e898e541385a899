//! Side panel with the auxiliary feature buttons.

use eframe::egui;
use aienv_container::ShellAction;

const FEATURE_ACTIONS: [(ShellAction, &str); 4] = [
    (ShellAction::ShowChat, "💬 AI Chat"),
    (ShellAction::ShowSettings, "⚙ Settings"),
    (ShellAction::ShowSecurity, "🛡 Security Status"),
    (ShellAction::ShowAuditLogs, "📋 Audit Logs"),
];

/// Renders the feature buttons. Returns the clicked action, if any.
pub fn render_feature_bar(ui: &mut egui::Ui) -> Option<ShellAction> {
    let mut clicked = None;

    ui.heading("Features");
    ui.separator();

    let width = ui.available_width();
    for (action, caption) in FEATURE_ACTIONS {
        if ui.add_sized([width, 32.0], egui::Button::new(caption)).clicked() {
            clicked = Some(action);
        }
        ui.add_space(4.0);
    }

    clicked
}
