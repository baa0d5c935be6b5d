//! Integration tests for the light/dark theme toggle.

mod common;

use common::{MockClipboard, MockSaver, TestCtx};
use kittest::Queryable as _;
use simpleqr_business::{Event, Theme};

#[test]
fn test_toggle_label_names_the_other_theme() {
    let mut ctx = TestCtx::new();
    ctx.harness_mut().run();
    assert!(ctx.harness().query_by_label("Dark mode").is_some());

    ctx.click("Dark mode");

    let harness = ctx.harness();
    assert!(harness.query_by_label("Light mode").is_some());
    assert_eq!(harness.state().state.controller.state().theme(), Theme::Dark);
    assert!(harness.ctx.style().visuals.dark_mode);
}

#[test]
fn test_starts_in_given_theme() {
    let mut ctx = TestCtx::with_mocks(MockClipboard::accepting(), MockSaver::default(), Theme::Dark);
    ctx.harness_mut().run();

    let harness = ctx.harness();
    assert!(harness.query_by_label("Light mode").is_some());
    assert_eq!(
        harness.state().state.controller.state().foreground(),
        Theme::Dark.palette().foreground
    );
}

#[test]
fn test_toggle_recolors_existing_code() {
    let mut ctx = TestCtx::new();
    ctx.type_text("https://example.com");
    ctx.click("Generate");
    let light = ctx
        .harness()
        .state()
        .state
        .controller
        .state()
        .output()
        .cloned()
        .expect("code should be rendered");

    ctx.click("Dark mode");

    let dark = ctx
        .harness()
        .state()
        .state
        .controller
        .state()
        .output()
        .cloned()
        .expect("code should still be rendered");
    assert_ne!(light.generation(), dark.generation());
    assert_ne!(light.rgba(), dark.rgba());
}

#[test]
fn test_toggle_twice_keeps_custom_foreground() {
    let mut ctx = TestCtx::new();
    ctx.harness_mut()
        .state_mut()
        .send(Event::ForegroundChanged(egui::Color32::RED));
    ctx.harness_mut().run();

    ctx.click("Dark mode");
    ctx.click("Light mode");

    let state = ctx.harness().state().state.controller.state();
    assert_eq!(state.foreground(), egui::Color32::RED);
    assert_eq!(state.background(), Theme::Light.palette().background);
}

#[derive(Default)]
struct MemoryStorage(std::collections::HashMap<String, String>);

impl eframe::Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.0.insert(key.to_owned(), value);
    }

    fn flush(&mut self) {}
}

#[test]
fn test_save_persists_toggled_theme() {
    use eframe::App as _;
    use simpleqr_business::THEME_STORAGE_KEY;
    use simpleqr_ui::SimpleQrApp;
    use simpleqr_ui::state::State;

    let mut app = SimpleQrApp::new(State::test(Theme::Light));
    let mut storage = MemoryStorage::default();

    app.send(Event::ThemeToggled);
    assert_eq!(app.pending_theme(), Some(Theme::Dark));
    app.save(&mut storage);

    assert_eq!(
        storage.0.get(THEME_STORAGE_KEY).map(String::as_str),
        Some("dark")
    );
    assert_eq!(app.pending_theme(), None);

    app.send(Event::ThemeToggled);
    app.save(&mut storage);
    assert_eq!(
        storage.0.get(THEME_STORAGE_KEY).map(String::as_str),
        Some("light")
    );
}
