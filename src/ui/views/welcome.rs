use crate::QuizApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::{WELCOME_PANEL, centered_panel};
use egui::{Color32, Context, RichText};

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    let mut start = false;

    centered_panel(ctx, WELCOME_PANEL, |ui| {
        ui.heading(RichText::new("Quizzical").size(36.0).strong());
        ui.add_space(8.0);
        ui.label("Let's test your knowledge!");
        ui.add_space(24.0);

        start = big_button(ui, "Start quiz", true).clicked();

        if !app.message.is_empty() {
            ui.add_space(12.0);
            ui.label(RichText::new(&app.message).color(Color32::YELLOW));
        }
    });

    if start {
        app.start_quiz(ctx);
    }
}
