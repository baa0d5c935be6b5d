//! Theme persistence and egui visuals.

use simpleqr_business::{THEME_STORAGE_KEY, Theme};

/// Reads the stored theme and falls back to the system preference.
pub fn initial_theme(storage: Option<&dyn eframe::Storage>, ctx: &egui::Context) -> Theme {
    let stored = storage.and_then(|s| s.get_string(THEME_STORAGE_KEY));
    let system = ctx.system_theme().map(|theme| match theme {
        egui::Theme::Dark => Theme::Dark,
        egui::Theme::Light => Theme::Light,
    });
    let theme = Theme::resolve(stored.as_deref(), system);
    log::debug!(
        "Initial theme {} (stored={stored:?}, system={system:?})",
        theme.as_str()
    );
    theme
}

pub fn store_theme(storage: &mut dyn eframe::Storage, theme: Theme) {
    storage.set_string(THEME_STORAGE_KEY, theme.as_str().to_owned());
}

pub fn apply_visuals(ctx: &egui::Context, theme: Theme) {
    let visuals = if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    ctx.set_visuals(visuals);
}
