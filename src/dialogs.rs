//! User-facing dialogs.

/// Presents modal feedback to the user.
pub trait DialogPresenter {
    /// Informational message with a single OK button.
    fn show_info(&self, title: &str, body: &str);

    /// Error message with a single OK button.
    fn show_error(&self, title: &str, body: &str);
}

/// Native message boxes. Blocks the calling (UI) thread until dismissed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDialogs;

impl NativeDialogs {
    fn show(title: &str, body: &str, level: rfd::MessageLevel) {
        let _ = rfd::MessageDialog::new()
            .set_title(title)
            .set_description(body)
            .set_level(level)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

impl DialogPresenter for NativeDialogs {
    fn show_info(&self, title: &str, body: &str) {
        Self::show(title, body, rfd::MessageLevel::Info);
    }

    fn show_error(&self, title: &str, body: &str) {
        Self::show(title, body, rfd::MessageLevel::Error);
    }
}
