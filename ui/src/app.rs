use bon::Builder;
use egui::TextureHandle;
use simpleqr_business::{AppConfig, Effect, Event, SaveError, Theme};

use crate::state::State;
use crate::utils::clipboard::{ClipboardSink, SystemClipboard};
use crate::utils::download::{PngSaver, SaveOutcome, SystemSaver};
use crate::utils::png::PngCache;
use crate::utils::theme;
use crate::widgets;

#[derive(Builder)]
pub struct SimpleQrApp {
    pub state: State,
    #[builder(default = default_clipboard())]
    clipboard: Box<dyn ClipboardSink>,
    #[builder(default = default_saver())]
    saver: Box<dyn PngSaver>,
    #[builder(skip)]
    texture: Option<(u64, TextureHandle)>,
    #[builder(skip)]
    png_cache: PngCache,
    #[builder(skip)]
    pending_theme: Option<Theme>,
    #[builder(skip)]
    applied_visuals: Option<Theme>,
}

fn default_clipboard() -> Box<dyn ClipboardSink> {
    Box::new(SystemClipboard::default())
}

fn default_saver() -> Box<dyn PngSaver> {
    Box::new(SystemSaver)
}

impl SimpleQrApp {
    pub fn new(state: State) -> Self {
        Self::builder().state(state).build()
    }

    /// Called once before the first frame.
    pub fn from_creation_context(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        let theme = theme::initial_theme(cc.storage, &cc.egui_ctx);
        Self::new(State::new(config, theme))
    }

    /// Theme written to storage on the next frame, if any.
    pub fn pending_theme(&self) -> Option<Theme> {
        self.pending_theme
    }

    /// Dispatches an event and carries out the resulting effects.
    pub fn send(&mut self, event: Event) {
        let effects = self.state.controller.dispatch(event);
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::PersistTheme(theme) => self.pending_theme = Some(theme),
            Effect::SavePng { filename, code } => {
                let result = match self.png_cache.png_for(&code) {
                    Ok(png) => self.saver.save_png(&filename, &png),
                    Err(e) => Err(SaveError::Encode(e.to_string())),
                };
                match result {
                    Ok(SaveOutcome::Saved) => self.send(Event::SaveFinished(Ok(()))),
                    Ok(SaveOutcome::Cancelled) => {}
                    Err(e) => self.send(Event::SaveFinished(Err(e))),
                }
            }
            Effect::CopyPng(code) => {
                self.clipboard
                    .copy_image(code, self.state.copy_result_sender.clone());
            }
        }
    }

    fn poll_copy_results(&mut self) {
        for result in self.state.poll_copy_results() {
            self.send(Event::CopyFinished(result));
        }
    }

    fn sync_visuals(&mut self, ctx: &egui::Context) {
        let theme = self.state.controller.state().theme();
        if self.applied_visuals != Some(theme) {
            theme::apply_visuals(ctx, theme);
            self.applied_visuals = Some(theme);
        }
    }

    fn flush_theme(&mut self, frame: &mut eframe::Frame) {
        let Some(pending) = self.pending_theme else {
            return;
        };
        if let Some(storage) = frame.storage_mut() {
            theme::store_theme(storage, pending);
            storage.flush();
            self.pending_theme = None;
        }
    }
}

impl eframe::App for SimpleQrApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.poll_copy_results();
        self.sync_visuals(ctx);

        let mut events = Vec::new();
        let controller = &self.state.controller;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            widgets::top_bar(ui, controller.state(), &mut events);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                widgets::input_form(ui, controller.state(), &mut events);
                ui.separator();
                widgets::options_panel(ui, controller.state(), &mut events);
                ui.separator();
                widgets::output_region(ui, controller.state(), &mut self.texture, &mut events);
            });
        });

        for event in events {
            self.send(event);
        }

        self.flush_theme(frame);

        if self.state.controller.state().copy_in_flight() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        theme::store_theme(storage, self.state.controller.state().theme());
        self.pending_theme = None;
    }
}
