//! UI state controller.
//!
//! The controller owns every piece of mutable UI state. The shell never edits
//! that state directly: it turns user interactions into [`Event`]s, hands them
//! to [`Controller::dispatch`], and carries out the returned [`Effect`]s.
//!
//! Invariant: an output exists only while the trimmed text is non-empty, and
//! the output region shows the empty-state message exactly when the trimmed
//! text is empty and nothing is rendered.

use egui::Color32;

use crate::{
    Analytics, AnalyticsEvent, CopyError, DefaultSettings, EncodeError, Encoder,
    ErrorCorrectionLevel, RenderSettings, RenderedCode, SaveError, Status, Theme, TriggerSource,
    clamp_size, download_filename, messages,
};

/// User interactions and completions of asynchronous effects.
#[derive(Debug)]
pub enum Event {
    TextChanged(String),
    SizeChanged(u32),
    LevelChanged(ErrorCorrectionLevel),
    ForegroundChanged(Color32),
    BackgroundChanged(Color32),
    FilenameChanged(String),
    AutoGenerateChanged(bool),
    GenerateClicked,
    DownloadClicked,
    CopyClicked,
    CopyFinished(Result<(), CopyError>),
    SaveFinished(Result<(), SaveError>),
    ClearClicked,
    ResetClicked,
    ThemeToggled,
    ThemeApplied(Theme),
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TextChanged(_) => "text_changed",
            Self::SizeChanged(_) => "size_changed",
            Self::LevelChanged(_) => "level_changed",
            Self::ForegroundChanged(_) => "foreground_changed",
            Self::BackgroundChanged(_) => "background_changed",
            Self::FilenameChanged(_) => "filename_changed",
            Self::AutoGenerateChanged(_) => "auto_generate_changed",
            Self::GenerateClicked => "generate_clicked",
            Self::DownloadClicked => "download_clicked",
            Self::CopyClicked => "copy_clicked",
            Self::CopyFinished(_) => "copy_finished",
            Self::SaveFinished(_) => "save_finished",
            Self::ClearClicked => "clear_clicked",
            Self::ResetClicked => "reset_clicked",
            Self::ThemeToggled => "theme_toggled",
            Self::ThemeApplied(_) => "theme_applied",
        }
    }
}

/// Work the shell must perform on the controller's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PersistTheme(Theme),
    /// Offer the code as a PNG download; report back with [`Event::SaveFinished`].
    SavePng { filename: String, code: RenderedCode },
    /// Put the code on the clipboard; report back with [`Event::CopyFinished`].
    CopyPng(RenderedCode),
}

/// Enabled flags for the action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStates {
    pub generate: bool,
    pub clear: bool,
    pub download: bool,
    pub copy: bool,
}

/// What the output region should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputView<'a> {
    /// Nothing typed and nothing rendered.
    Empty(&'static str),
    /// Text typed but not generated yet.
    Blank,
    Code(&'a RenderedCode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    text: String,
    size: u32,
    level: ErrorCorrectionLevel,
    foreground: Color32,
    background: Color32,
    custom_foreground: bool,
    custom_background: bool,
    filename: String,
    auto_generate: bool,
    theme: Theme,
    output: Option<RenderedCode>,
    status: Option<Status>,
    /// Generation of the code being copied, while a copy is running.
    copying: Option<u64>,
}

impl UiState {
    fn new(theme: Theme, defaults: &DefaultSettings) -> Self {
        let palette = theme.palette();
        Self {
            text: String::new(),
            size: defaults.size,
            level: defaults.level,
            foreground: palette.foreground,
            background: palette.background,
            custom_foreground: false,
            custom_background: false,
            filename: defaults.filename.clone(),
            auto_generate: defaults.auto_generate,
            theme,
            output: None,
            status: None,
            copying: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn level(&self) -> ErrorCorrectionLevel {
        self.level
    }

    pub fn foreground(&self) -> Color32 {
        self.foreground
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn custom_foreground(&self) -> bool {
        self.custom_foreground
    }

    pub fn custom_background(&self) -> bool {
        self.custom_background
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn auto_generate(&self) -> bool {
        self.auto_generate
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The current output handle.
    pub fn output(&self) -> Option<&RenderedCode> {
        self.output.as_ref()
    }

    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn copy_in_flight(&self) -> bool {
        self.copying.is_some()
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            text: self.text.trim().to_owned(),
            size: self.size,
            level: self.level,
            foreground: self.foreground,
            background: self.background,
        }
    }

    pub fn buttons(&self) -> ButtonStates {
        let has_text = self.has_text();
        let has_output = self.output.is_some();
        ButtonStates {
            generate: has_text,
            clear: has_text || has_output,
            download: has_output,
            copy: has_output && self.copying.is_none(),
        }
    }

    pub fn output_view(&self) -> OutputView<'_> {
        match &self.output {
            Some(code) => OutputView::Code(code),
            None if self.has_text() => OutputView::Blank,
            None => OutputView::Empty(messages::EMPTY),
        }
    }
}

pub struct Controller {
    state: UiState,
    defaults: DefaultSettings,
    encoder: Option<Box<dyn Encoder>>,
    analytics: Option<Box<dyn Analytics>>,
    generation: u64,
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("state", &self.state)
            .field("defaults", &self.defaults)
            .field("has_encoder", &self.encoder.is_some())
            .field("has_analytics", &self.analytics.is_some())
            .field("generation", &self.generation)
            .finish()
    }
}

impl Controller {
    pub fn new(
        theme: Theme,
        defaults: DefaultSettings,
        encoder: Option<Box<dyn Encoder>>,
        analytics: Option<Box<dyn Analytics>>,
    ) -> Self {
        Self {
            state: UiState::new(theme, &defaults),
            defaults,
            encoder,
            analytics,
            generation: 0,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn defaults(&self) -> &DefaultSettings {
        &self.defaults
    }

    /// Routes one event to its handler and returns the effects it requested.
    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        log::debug!("dispatch {}", event.name());
        match event {
            Event::TextChanged(text) => self.on_text_changed(text),
            Event::SizeChanged(size) => {
                self.state.size = clamp_size(size);
                self.refresh_after_option_change()
            }
            Event::LevelChanged(level) => {
                self.state.level = level;
                self.refresh_after_option_change()
            }
            Event::ForegroundChanged(color) => {
                self.state.foreground = color;
                self.state.custom_foreground = true;
                self.refresh_after_option_change()
            }
            Event::BackgroundChanged(color) => {
                self.state.background = color;
                self.state.custom_background = true;
                self.refresh_after_option_change()
            }
            Event::FilenameChanged(name) => {
                self.state.filename = name;
                Vec::new()
            }
            Event::AutoGenerateChanged(enabled) => self.on_auto_generate_changed(enabled),
            Event::GenerateClicked => {
                self.render(TriggerSource::Manual);
                Vec::new()
            }
            Event::DownloadClicked => self.download(),
            Event::CopyClicked => self.copy(),
            Event::CopyFinished(result) => self.on_copy_finished(result),
            Event::SaveFinished(result) => self.on_save_finished(result),
            Event::ClearClicked => self.clear(),
            Event::ResetClicked => self.reset_options(),
            Event::ThemeToggled => self.apply_theme(self.state.theme.toggled()),
            Event::ThemeApplied(theme) => self.apply_theme(theme),
        }
    }

    fn on_text_changed(&mut self, text: String) -> Vec<Effect> {
        self.state.text = text;
        if !self.state.has_text() {
            self.state.output = None;
            self.state.status = None;
        } else if self.state.auto_generate {
            self.render(TriggerSource::Auto);
        }
        Vec::new()
    }

    fn on_auto_generate_changed(&mut self, enabled: bool) -> Vec<Effect> {
        self.state.auto_generate = enabled;
        if enabled && self.state.has_text() {
            self.render(TriggerSource::Auto);
        }
        Vec::new()
    }

    fn refresh_after_option_change(&mut self) -> Vec<Effect> {
        if self.state.auto_generate {
            self.render(TriggerSource::Auto);
        } else if self.state.output.is_some() {
            self.render(TriggerSource::Update);
        }
        Vec::new()
    }

    fn render(&mut self, trigger: TriggerSource) {
        if !self.state.has_text() {
            self.state.output = None;
            return;
        }

        let Some(encoder) = self.encoder.as_ref() else {
            log::warn!("render ({}) skipped: no QR encoder", trigger.as_str());
            self.state.status = Some(Status::error(messages::ENCODER_UNAVAILABLE));
            return;
        };

        let settings = self.state.render_settings();
        match encoder.encode(&settings) {
            Ok(code) => {
                self.generation = self.generation.wrapping_add(1);
                log::debug!(
                    "rendered {}x{} code ({}), generation {}",
                    code.width(),
                    code.height(),
                    trigger.as_str(),
                    self.generation
                );
                self.state.output = Some(code.with_generation(self.generation));
                self.state.status = None;
                self.track(
                    AnalyticsEvent::new("qr_generated")
                        .param("trigger", trigger.as_str())
                        .param("size", settings.size)
                        .param("level", settings.level),
                );
            }
            Err(EncodeError::Unavailable) => {
                log::warn!("render ({}) failed: encoder unavailable", trigger.as_str());
                self.state.status = Some(Status::error(messages::ENCODER_UNAVAILABLE));
            }
            Err(err) => {
                log::warn!("render ({}) failed: {err}", trigger.as_str());
                self.state.output = None;
                let message = match err {
                    EncodeError::DataTooLong(_) => messages::TOO_LONG,
                    _ => messages::ENCODE_FAILED,
                };
                self.state.status = Some(Status::error(message));
            }
        }
    }

    fn download(&mut self) -> Vec<Effect> {
        let Some(code) = self.state.output.clone() else {
            return Vec::new();
        };
        let filename = download_filename(&self.state.filename);
        self.track(AnalyticsEvent::new("qr_downloaded").param("filename", &filename));
        vec![Effect::SavePng { filename, code }]
    }

    fn copy(&mut self) -> Vec<Effect> {
        if self.state.copying.is_some() {
            return Vec::new();
        }
        let Some(code) = self.state.output.clone() else {
            return Vec::new();
        };
        self.state.copying = Some(code.generation());
        vec![Effect::CopyPng(code)]
    }

    fn on_copy_finished(&mut self, result: Result<(), CopyError>) -> Vec<Effect> {
        let copied = self.state.copying.take();
        let current = self.state.output.as_ref().map(RenderedCode::generation);
        if copied.is_none() || copied != current {
            // Output changed since the copy started.
            log::debug!("dropping stale copy result for generation {copied:?}: {result:?}");
            return Vec::new();
        }
        match result {
            Ok(()) => {
                self.state.status = Some(Status::info(messages::COPIED));
                self.track(AnalyticsEvent::new("qr_copied"));
            }
            Err(err) => {
                log::warn!("copy failed: {err}");
                self.state.status = Some(Status::error(messages::COPY_FAILED));
            }
        }
        Vec::new()
    }

    fn on_save_finished(&mut self, result: Result<(), SaveError>) -> Vec<Effect> {
        if let Err(err) = result {
            log::warn!("save failed: {err}");
            self.state.status = Some(Status::error(messages::SAVE_FAILED));
        }
        Vec::new()
    }

    fn clear(&mut self) -> Vec<Effect> {
        self.state.text.clear();
        self.state.output = None;
        self.state.status = None;
        self.track(AnalyticsEvent::new("qr_cleared"));
        Vec::new()
    }

    fn reset_options(&mut self) -> Vec<Effect> {
        let palette = self.state.theme.palette();
        self.state.size = self.defaults.size;
        self.state.level = self.defaults.level;
        self.state.filename.clone_from(&self.defaults.filename);
        self.state.auto_generate = self.defaults.auto_generate;
        self.state.custom_foreground = false;
        self.state.custom_background = false;
        self.state.foreground = palette.foreground;
        self.state.background = palette.background;
        if self.state.output.is_some() {
            self.render(TriggerSource::Reset);
        }
        Vec::new()
    }

    fn apply_theme(&mut self, theme: Theme) -> Vec<Effect> {
        let palette = theme.palette();
        self.state.theme = theme;
        if !self.state.custom_foreground {
            self.state.foreground = palette.foreground;
        }
        if !self.state.custom_background {
            self.state.background = palette.background;
        }
        if self.state.output.is_some() {
            self.render(TriggerSource::Theme);
        }
        vec![Effect::PersistTheme(theme)]
    }

    fn track(&self, event: AnalyticsEvent) {
        if let Some(analytics) = &self.analytics {
            analytics.track(&event);
        }
    }
}
