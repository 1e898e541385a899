//! Status bar UI rendering
//!
//! Handles the bottom status bar showing the outcome of the last action.

use eframe::egui;
use egui::{Color32, RichText};
use aienv_container::ShellController;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `controller` - Window state to display
pub fn render_status_bar(ui: &mut egui::Ui, controller: &ShellController) {
    ui.horizontal(|ui| {
        let status = controller.status();
        let text = RichText::new(status.text()).strong();
        if status.is_error() {
            ui.label(text.color(Color32::RED));
        } else {
            ui.label(text);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(format!("View: {}", controller.view())).weak());
        });
    });
}
