use egui::{Button, Key, TextEdit, Ui};
use simpleqr_business::{Event, UiState};

/// Text field with the Generate and Clear actions.
///
/// Pressing Enter in the field generates, same as clicking Generate.
pub fn input_form(ui: &mut Ui, state: &UiState, events: &mut Vec<Event>) {
    let mut text = state.text().to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut text)
            .hint_text("https://example.com")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        events.push(Event::TextChanged(text.clone()));
    }
    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

    let buttons = state.buttons();
    ui.horizontal(|ui| {
        let generate = ui.add_enabled(buttons.generate, Button::new("Generate"));
        if generate.clicked() || (submitted && !text.trim().is_empty()) {
            events.push(Event::GenerateClicked);
        }
        if ui.add_enabled(buttons.clear, Button::new("Clear")).clicked() {
            events.push(Event::ClearClicked);
        }
    });
}
