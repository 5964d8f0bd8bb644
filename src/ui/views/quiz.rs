use crate::QuizApp;
use crate::ui::helpers::{big_button, option_text};
use crate::ui::layout::quiz_column;
use crate::view_models::result_line;
use egui::{Color32, Context, RadioButton, RichText, Sense};
use std::time::Duration;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);
    let views = app.session.question_views();
    let can_grade = app.session.can_grade();
    let score = app.session.score();
    let show_warning = app.warning_visible(now);

    let mut picked: Option<(usize, String)> = None;
    let mut check = false;
    let mut early_check = false;
    let mut again = false;

    quiz_column(ctx, |ui| {
        for question in &views {
            ui.add_space(12.0);
            ui.label(RichText::new(&question.text).heading().strong());
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                for option in &question.options {
                    let radio = RadioButton::new(option.checked, option_text(option));
                    if ui.add_enabled(option.enabled, radio).clicked() {
                        picked = Some((question.index, option.text.clone()));
                    }
                    ui.add_space(12.0);
                }
            });
            ui.add_space(6.0);
            ui.separator();
        }

        ui.add_space(16.0);
        match score {
            None => {
                let button = big_button(ui, "Check answers", can_grade);
                if can_grade {
                    check = button.clicked();
                } else {
                    // El botón deshabilitado no recibe clics: se detectan encima
                    let gate = ui.interact(
                        button.rect,
                        ui.id().with("check_answers_gate"),
                        Sense::click(),
                    );
                    early_check = gate.clicked();
                }

                if show_warning {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Please answer all questions first")
                            .color(Color32::YELLOW),
                    );
                }
            }
            Some(score) => {
                ui.label(RichText::new(result_line(score)).heading());
                ui.add_space(8.0);
                again = big_button(ui, "Play again", true).clicked();
            }
        }
    });

    if let Some((index, value)) = picked {
        app.select_option(index, &value);
    }
    if check || early_check {
        app.check_answers(now);
    }
    if again {
        app.play_again(ctx);
    }

    // Repinta cuando toque ocultar el aviso
    if let Some(left) = app.warning.remaining(now) {
        ctx.request_repaint_after(Duration::from_secs_f64(left));
    }
}
