//! Header panel UI rendering
//!
//! Title on the left; user, clock and theme selector on the right.

use eframe::egui;
use egui::RichText;
use aienv_container::ShellController;
use crate::app::ThemePreference;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a different theme
    ThemeChanged(ThemePreference),
}

/// Renders the application header.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `controller` - Window state to display
/// * `theme` - Currently applied theme
pub fn render_header(
    ui: &mut egui::Ui,
    controller: &ShellController,
    theme: ThemePreference,
) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.label(RichText::new("AIEnv Integrated Container").heading().strong());
        ui.label(RichText::new("Demo Mode").italics());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut selected = theme;
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(selected.name())
                .show_ui(ui, |ui| {
                    for option in ThemePreference::ALL {
                        ui.selectable_value(&mut selected, option, option.name());
                    }
                });
            ui.label("Theme:");

            if selected != theme {
                interaction = Some(HeaderInteraction::ThemeChanged(selected));
            }

            ui.separator();
            ui.label(RichText::new(controller.clock_text()).monospace().strong());
            ui.label("🕒");
            ui.separator();
            ui.label(RichText::new(controller.user().display_name()).strong());
            ui.label("👤");
        });
    });

    interaction
}
