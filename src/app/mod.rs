//! Application-level modules for the container shell binary.
//!
//! This module contains persistence coordination for window preferences.

mod theme_coordinator;
mod settings_coordinator;

pub use theme_coordinator::{ThemeCoordinator, ThemePreference};
pub use settings_coordinator::SettingsCoordinator;
