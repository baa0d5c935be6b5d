use std::sync::{Arc, Mutex};

use egui_kittest::Harness;
use flume::Sender;
use simpleqr_business::{CopyError, Event, RenderedCode, SaveError, Theme};
use simpleqr_ui::SimpleQrApp;
use simpleqr_ui::state::State;
use simpleqr_ui::utils::clipboard::{ClipboardSink, CopyResult};
use simpleqr_ui::utils::download::{PngSaver, SaveOutcome};

/// Clipboard double that answers immediately with a fixed result.
#[derive(Clone)]
pub struct MockClipboard {
    result: CopyResult,
    pub copied: Arc<Mutex<Vec<RenderedCode>>>,
}

impl MockClipboard {
    pub fn accepting() -> Self {
        Self {
            result: Ok(()),
            copied: Arc::default(),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            result: Err(CopyError::Rejected("NotAllowedError".to_owned())),
            copied: Arc::default(),
        }
    }

    #[allow(unused)]
    pub fn copied_count(&self) -> usize {
        self.copied.lock().map(|c| c.len()).unwrap_or_default()
    }
}

impl ClipboardSink for MockClipboard {
    fn copy_image(&self, code: RenderedCode, done: Sender<CopyResult>) {
        if let Ok(mut copied) = self.copied.lock() {
            copied.push(code);
        }
        done.send(self.result.clone())
            .expect("copy result receiver should be alive");
    }
}

/// Saver double that records what would have been written.
#[derive(Clone, Default)]
pub struct MockSaver {
    pub fail: bool,
    pub saved: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

impl PngSaver for MockSaver {
    fn save_png(&self, filename: &str, png: &[u8]) -> Result<SaveOutcome, SaveError> {
        if self.fail {
            return Err(SaveError::Io("read-only file system".to_owned()));
        }
        if let Ok(mut saved) = self.saved.lock() {
            saved.push((filename.to_owned(), png.to_vec()));
        }
        Ok(SaveOutcome::Saved)
    }
}

pub struct TestCtx<'a> {
    harness: Harness<'a, SimpleQrApp>,
}

impl<'a> TestCtx<'a> {
    pub fn new() -> Self {
        Self::with_mocks(MockClipboard::accepting(), MockSaver::default(), Theme::Light)
    }

    pub fn with_mocks(clipboard: MockClipboard, saver: MockSaver, theme: Theme) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let app = SimpleQrApp::builder()
            .state(State::test(theme))
            .clipboard(Box::new(clipboard))
            .saver(Box::new(saver))
            .build();
        let harness = Harness::builder()
            .with_size(egui::vec2(800.0, 1400.0))
            .build_eframe(|_| app);

        Self { harness }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, SimpleQrApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, SimpleQrApp> {
        &self.harness
    }

    /// Feeds text as if typed into the input field, then runs frames.
    pub fn type_text(&mut self, text: &str) {
        self.harness
            .state_mut()
            .send(Event::TextChanged(text.to_owned()));
        self.harness.run();
    }

    /// Clicks the widget with exactly this label, then runs frames.
    pub fn click(&mut self, label: &str) {
        use kittest::Queryable as _;

        self.harness.get_by_label(label).click();
        self.harness.run();
    }
}
