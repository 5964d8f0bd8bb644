mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::Phase;
use eframe::{App, Frame};
use egui::Context;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Recoge la carga en curso antes de pintar
        self.poll_load_result();

        // Dispatch por fase
        match self.session.phase() {
            Phase::Idle => views::welcome::ui_welcome(self, ctx),
            Phase::Loading => views::loading::ui_loading(ctx),
            Phase::Answering | Phase::Graded => views::quiz::ui_quiz(self, ctx),
        }
    }
}
