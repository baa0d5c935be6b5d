//! Integration tests for downloading the rendered code as a PNG.

mod common;

use common::{MockClipboard, MockSaver, TestCtx};
use kittest::Queryable as _;
use simpleqr_business::{Event, Theme, messages};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

#[test]
fn test_download_saves_png_under_sanitized_name() {
    let saver = MockSaver::default();
    let mut ctx = TestCtx::with_mocks(MockClipboard::accepting(), saver.clone(), Theme::Light);
    ctx.type_text("https://example.com");
    ctx.click("Generate");
    ctx.harness_mut()
        .state_mut()
        .send(Event::FilenameChanged("event: ticket/42".to_owned()));
    ctx.click("Download");

    let saved = saver.saved.lock().expect("saver lock").clone();
    assert_eq!(saved.len(), 1);
    let (filename, png) = &saved[0];
    assert_eq!(filename, "event ticket42.png");
    assert!(png.starts_with(PNG_SIGNATURE));
}

#[test]
fn test_download_falls_back_to_default_name() {
    let saver = MockSaver::default();
    let mut ctx = TestCtx::with_mocks(MockClipboard::accepting(), saver.clone(), Theme::Light);
    ctx.type_text("hello");
    ctx.click("Generate");
    ctx.harness_mut()
        .state_mut()
        .send(Event::FilenameChanged("   ".to_owned()));
    ctx.click("Download");

    let saved = saver.saved.lock().expect("saver lock").clone();
    assert_eq!(saved.first().map(|(name, _)| name.as_str()), Some("simpleqr.png"));
}

#[test]
fn test_download_without_code_does_nothing() {
    let saver = MockSaver::default();
    let mut ctx = TestCtx::with_mocks(MockClipboard::accepting(), saver.clone(), Theme::Light);
    ctx.click("Download");

    assert!(saver.saved.lock().expect("saver lock").is_empty());
}

#[test]
fn test_save_failure_shows_status() {
    let saver = MockSaver {
        fail: true,
        ..MockSaver::default()
    };
    let mut ctx = TestCtx::with_mocks(MockClipboard::accepting(), saver, Theme::Light);
    ctx.type_text("hello");
    ctx.click("Generate");
    ctx.click("Download");

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label(messages::SAVE_FAILED).is_some());
    assert!(harness.state().state.controller.state().output().is_some());
}
