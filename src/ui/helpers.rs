// src/ui/helpers.rs
use crate::view_models::{OptionVerdict, OptionView};
use egui::{Button, Color32, RichText, Ui, Vec2};

pub const BUTTON_SIZE: Vec2 = Vec2::new(200.0, 40.0);

pub fn big_button(ui: &mut Ui, label: &str, enabled: bool) -> egui::Response {
    ui.add_enabled(enabled, Button::new(RichText::new(label).strong()).min_size(BUTTON_SIZE))
}

/// Texto de la opción con el color de la corrección.
pub fn option_text(option: &OptionView) -> RichText {
    let text = RichText::new(&option.text);
    match option.verdict {
        OptionVerdict::Neutral => text,
        OptionVerdict::Correct => text.color(Color32::from_rgb(46, 160, 67)).strong(),
        OptionVerdict::Wrong => text.color(Color32::from_rgb(218, 54, 51)).strikethrough(),
    }
}
