use egui::load::SizedTexture;
use egui::{Button, TextureHandle, TextureOptions, Ui};
use simpleqr_business::{Event, OutputView, RenderedCode, UiState};

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};
use crate::utils::qr::to_color_image;

/// Height reserved while text is typed but nothing is generated yet.
const PLACEHOLDER_HEIGHT: f32 = 64.0;

/// Output region: the empty-state message or the code, then Download/Copy
/// and the status line.
///
/// `texture` caches the uploaded image keyed by the code's generation.
pub fn output_region(
    ui: &mut Ui,
    state: &UiState,
    texture: &mut Option<(u64, TextureHandle)>,
    events: &mut Vec<Event>,
) {
    match state.output_view() {
        OutputView::Empty(message) => {
            *texture = None;
            ui.label(message);
        }
        OutputView::Blank => {
            *texture = None;
            ui.add_space(PLACEHOLDER_HEIGHT);
        }
        OutputView::Code(code) => {
            code_image(ui, code, texture);
            ui.label(format!(
                "{}×{} px, level {}",
                code.width(),
                code.height(),
                state.level()
            ));
        }
    }

    let buttons = state.buttons();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(buttons.download, Button::new("Download"))
            .clicked()
        {
            events.push(Event::DownloadClicked);
        }
        if ui.add_enabled(buttons.copy, Button::new("Copy")).clicked() {
            events.push(Event::CopyClicked);
        }
    });

    if let Some(status) = state.status() {
        let color = if status.is_error() {
            COLOR_RED
        } else {
            COLOR_GREEN
        };
        ui.colored_label(color, status.message);
    }
}

fn code_image(ui: &mut Ui, code: &RenderedCode, texture: &mut Option<(u64, TextureHandle)>) {
    let stale = texture
        .as_ref()
        .is_none_or(|(generation, _)| *generation != code.generation());
    if stale {
        let handle = ui
            .ctx()
            .load_texture("qr-code", to_color_image(code), TextureOptions::NEAREST);
        *texture = Some((code.generation(), handle));
    }

    if let Some((_, handle)) = texture.as_ref() {
        let size = egui::vec2(code.width() as f32, code.height() as f32);
        ui.image(SizedTexture::new(handle.id(), size));
    }
}
