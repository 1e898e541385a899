//! Panel orchestration and layout management.
//!
//! Lays out the header, feature bar, status bar and whichever central region
//! the view state selects, and collects user interactions for the application.

use aienv_container::{ShellAction, ShellController, WindowViewState};
use crate::app::ThemePreference;
use crate::ui::{feature_bar, header, status_bar, tool_panel, welcome_panel};

/// Result of panel interactions that need to be handled by the application.
pub enum PanelInteraction {
    /// A button mapped to a controller action was clicked
    Action(ShellAction),
    /// The theme selector changed
    ThemeChanged(ThemePreference),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation. Exactly one of the
    /// welcome and tool panel regions is drawn per frame.
    pub fn render_all_panels(
        ctx: &egui::Context,
        controller: &ShellController,
        theme: ThemePreference,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header::HeaderInteraction::ThemeChanged(selected)) =
                header::render_header(ui, controller, theme)
            {
                interaction = Some(PanelInteraction::ThemeChanged(selected));
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, controller);
        });

        egui::SidePanel::left("feature_bar")
            .default_width(200.0)
            .resizable(false)
            .show(ctx, |ui| {
                if let Some(action) = feature_bar::render_feature_bar(ui) {
                    interaction = Some(PanelInteraction::Action(action));
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let action = match controller.view() {
                WindowViewState::Welcome => welcome_panel::render_welcome_panel(ui, controller),
                WindowViewState::ToolPanelActive => tool_panel::render_tool_panel(ui),
            };
            if let Some(action) = action {
                interaction = Some(PanelInteraction::Action(action));
            }
        });

        interaction
    }
}
