// src/view_models.rs

use crate::app::QuizSession;
use crate::model::QUIZ_LENGTH;

/// Cómo se pinta una opción tras corregir.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionVerdict {
    Neutral,
    Correct,
    Wrong,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub text: String,
    pub checked: bool,
    pub enabled: bool,
    pub verdict: OptionVerdict,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub index: usize,
    pub text: String,
    pub options: Vec<OptionView>,
}

impl QuizSession {
    /// Vista de todas las preguntas; vacía si no hay lote.
    pub fn question_views(&self) -> Vec<QuestionView> {
        let Some(batch) = self.batch() else {
            return Vec::new();
        };
        let graded = self.score().is_some();

        batch
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let selected = self.selected(index);
                let options = question
                    .options()
                    .iter()
                    .map(|option| {
                        let checked = selected == Some(option.as_str());
                        let verdict = if !graded {
                            OptionVerdict::Neutral
                        } else if question.is_correct(option) {
                            OptionVerdict::Correct
                        } else if checked {
                            OptionVerdict::Wrong
                        } else {
                            OptionVerdict::Neutral
                        };
                        OptionView {
                            text: option.clone(),
                            checked,
                            enabled: !graded,
                            verdict,
                        }
                    })
                    .collect();

                QuestionView {
                    index,
                    text: question.text().to_string(),
                    options,
                }
            })
            .collect()
    }
}

pub fn result_line(score: usize) -> String {
    format!("You scored {score}/{QUIZ_LENGTH} correct answers")
}
