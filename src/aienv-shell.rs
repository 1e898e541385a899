//! AIEnv Integrated Container shell
//!
//! Desktop window hosting the welcome view, the simulated feature launcher and
//! the status and clock indicators. The binary is a thin rendering layer:
//! - `app/` - Preference persistence (theme)
//! - `ui/` - Panel rendering and layout
//!
//! All state lives in the library's `ShellController`; lifecycle and logging
//! are owned by `ApplicationHost`.
//!
//! Set `AIENV_LOG` (`error`, `warn`, `info`, `debug`, `trace`) to change the
//! log level. Logs are written to `logs/aienv-container.<date>.log`.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::sync::Arc;

use anyhow::Context as _;
use eframe::egui;

mod app;
mod ui;

use aienv_container::{ApplicationHost, ShellConfig, ShellController, ShellError};
use app::{ThemeCoordinator, ThemePreference};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Starts the host, runs the window to completion, then stops the host.
fn main() -> anyhow::Result<()> {
    let config = ShellConfig::from_env();

    let mut host = ApplicationHost::start(config.clone()).context("failed to start application host")?;
    host.install_panic_hook();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window.inner_size)
            .with_title(config.window.title.as_str()),
        ..Default::default()
    };

    let result = eframe::run_native(
        &config.window.title,
        options,
        Box::new(|cc| Ok(Box::new(ContainerApp::new(cc, &host)?))),
    );

    host.stop();

    result.map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}

/// The main container window.
struct ContainerApp {
    /// Window state machine, clock and action handlers
    controller: ShellController,
    /// Theme currently applied; persisted on save
    theme: ThemePreference,
}

impl ContainerApp {
    /// Resolves the window controller from the host, wiring its timer to egui repaints.
    fn new(cc: &eframe::CreationContext<'_>, host: &ApplicationHost) -> Result<Self, ShellError> {
        let ctx = cc.egui_ctx.clone();
        let controller = host.resolve_window(Arc::new(move || ctx.request_repaint()))?;

        Ok(Self {
            controller,
            theme: ThemeCoordinator::load_theme_from_storage(cc.storage),
        })
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::Action(action) => {
                self.controller.dispatch(action);
            }
            PanelInteraction::ThemeChanged(theme) => {
                self.theme = theme;
            }
        }
    }
}

impl eframe::App for ContainerApp {
    /// Called when the app is being shut down - ensures the theme is saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.theme);
    }

    /// Main update loop.
    ///
    /// 1. Tear down on close request
    /// 2. Consume queued timer ticks
    /// 3. Apply theme
    /// 4. Render all panels and dispatch the resulting interaction
    /// 5. Schedule the next frame within one tick interval
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.controller.close();
            return;
        }

        self.controller.pump_timer();

        ThemeCoordinator::apply_theme(ctx, self.theme);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &self.controller, self.theme) {
            self.handle_panel_interaction(interaction);
        }

        ctx.request_repaint_after(self.controller.clock_interval());
    }
}
