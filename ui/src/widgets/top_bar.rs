use egui::Ui;
use simpleqr_business::{Event, UiState};

/// App title on the left, theme toggle on the right.
pub fn top_bar(ui: &mut Ui, state: &UiState, events: &mut Vec<Event>) {
    egui::MenuBar::new().ui(ui, |ui| {
        ui.strong("SimpleQR");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(state.theme().toggle_label()).clicked() {
                events.push(Event::ThemeToggled);
            }
        });
    });
}
