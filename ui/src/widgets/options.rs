use egui::{ComboBox, Grid, TextEdit, Ui};
use simpleqr_business::{ErrorCorrectionLevel, Event, SIZE_CHOICES, UiState};

/// Size, error correction, colors, filename and the auto-generate switch.
pub fn options_panel(ui: &mut Ui, state: &UiState, events: &mut Vec<Event>) {
    Grid::new("options_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Size");
            let mut size = state.size();
            ComboBox::from_id_salt("size_combo")
                .selected_text(format!("{size} px"))
                .show_ui(ui, |ui| {
                    for choice in SIZE_CHOICES {
                        ui.selectable_value(&mut size, choice, format!("{choice} px"));
                    }
                });
            if size != state.size() {
                events.push(Event::SizeChanged(size));
            }
            ui.end_row();

            ui.label("Error correction");
            let mut level = state.level();
            ComboBox::from_id_salt("level_combo")
                .selected_text(level.label())
                .show_ui(ui, |ui| {
                    for choice in ErrorCorrectionLevel::ALL {
                        ui.selectable_value(&mut level, choice, choice.label());
                    }
                });
            if level != state.level() {
                events.push(Event::LevelChanged(level));
            }
            ui.end_row();

            ui.label("Foreground");
            let mut foreground = state.foreground();
            if ui.color_edit_button_srgba(&mut foreground).changed() {
                events.push(Event::ForegroundChanged(foreground));
            }
            ui.end_row();

            ui.label("Background");
            let mut background = state.background();
            if ui.color_edit_button_srgba(&mut background).changed() {
                events.push(Event::BackgroundChanged(background));
            }
            ui.end_row();

            ui.label("Filename");
            let mut filename = state.filename().to_owned();
            if ui
                .add(TextEdit::singleline(&mut filename).hint_text("simpleqr"))
                .changed()
            {
                events.push(Event::FilenameChanged(filename));
            }
            ui.end_row();
        });

    ui.horizontal(|ui| {
        let mut auto_generate = state.auto_generate();
        if ui.checkbox(&mut auto_generate, "Auto-generate").changed() {
            events.push(Event::AutoGenerateChanged(auto_generate));
        }
        if ui.button("Reset options").clicked() {
            events.push(Event::ResetClicked);
        }
    });
}
