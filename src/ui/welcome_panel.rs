//! Welcome region shown until the tool panel is launched.

use eframe::egui;
use egui::RichText;
use aienv_container::{ShellAction, ShellController};

/// Renders the welcome region with the launch button.
///
/// # Returns
/// * `Some(ShellAction::LaunchToolPanel)` when the launch button was clicked
pub fn render_welcome_panel(ui: &mut egui::Ui, controller: &ShellController) -> Option<ShellAction> {
    let mut clicked = None;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.2);
        ui.label(RichText::new("Welcome to the AIEnv Integrated Container").size(26.0).strong());
        ui.add_space(8.0);
        ui.label(format!("Signed in as {}", controller.user().display_name()));
        ui.add_space(4.0);
        ui.label("Secure, air-gapped development environment with local AI assistance.");
        ui.add_space(24.0);

        let launch = egui::Button::new(RichText::new("🚀 Launch AIEnv").size(18.0));
        if ui.add_sized([220.0, 44.0], launch).clicked() {
            clicked = Some(ShellAction::LaunchToolPanel);
        }
    });

    clicked
}
