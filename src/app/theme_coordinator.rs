//! Theme selection and persistence.

use serde::{Deserialize, Serialize};

use crate::app::SettingsCoordinator;

const THEME_KEY: &str = "theme_preference";

/// Visual theme of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 2] = [ThemePreference::Dark, ThemePreference::Light];

    pub fn name(self) -> &'static str {
        match self {
            ThemePreference::Dark => "Dark",
            ThemePreference::Light => "Light",
        }
    }
}

/// Coordinates theme persistence and application.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the saved theme, defaulting to dark.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> ThemePreference {
        SettingsCoordinator::load_setting_or(storage, THEME_KEY, ThemePreference::default())
    }

    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme: ThemePreference) {
        SettingsCoordinator::save_setting(storage, THEME_KEY, &theme);
    }

    /// Applies the theme to the egui context. Called every frame.
    pub fn apply_theme(ctx: &egui::Context, theme: ThemePreference) {
        let visuals = match theme {
            ThemePreference::Dark => egui::Visuals::dark(),
            ThemePreference::Light => egui::Visuals::light(),
        };
        ctx.set_visuals(visuals);
    }
}
