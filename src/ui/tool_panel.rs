//! Host region for the embedded tool.
//!
//! The embedded sub-application is not part of this shell; the region only
//! reserves space for it while the tool panel is active.

use eframe::egui;
use egui::RichText;
use aienv_container::ShellAction;

/// Renders the tool panel host region.
///
/// # Returns
/// * `Some(ShellAction::CloseToolPanel)` when the close button was clicked
pub fn render_tool_panel(ui: &mut egui::Ui) -> Option<ShellAction> {
    let mut clicked = None;

    ui.horizontal(|ui| {
        ui.heading("AIEnv Tool Panel");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✖ Close").clicked() {
                clicked = Some(ShellAction::CloseToolPanel);
            }
        });
    });
    ui.separator();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_size(ui.available_size());
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("Embedded tool interface (Demo Mode)").italics().weak());
        });
    });

    clicked
}
