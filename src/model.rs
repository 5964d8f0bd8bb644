// src/model.rs

use crate::error::LoadError;
use crate::shuffle::shuffle_options;
use rand::Rng;
use std::collections::HashSet;

/// Preguntas por partida. No es configurable.
pub const QUIZ_LENGTH: usize = 5;
/// Opciones por pregunta (1 correcta + 3 incorrectas).
pub const OPTION_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    text: String,
    correct_answer: String,
    options: Vec<String>, // orden fijado al cargar
}

impl Question {
    /// Construye la pregunta mezclando la correcta con las incorrectas.
    /// El texto ya debe venir decodificado.
    pub fn new<R: Rng>(
        text: String,
        correct_answer: String,
        incorrect_answers: Vec<String>,
        rng: &mut R,
    ) -> Result<Self, LoadError> {
        if incorrect_answers.len() != OPTION_COUNT - 1 {
            return Err(LoadError::Malformed(format!(
                "expected {} incorrect answers, got {}",
                OPTION_COUNT - 1,
                incorrect_answers.len()
            )));
        }
        let mut combined = incorrect_answers;
        combined.push(correct_answer.clone());
        let options = shuffle_options(&combined, rng);
        Self::with_options(text, correct_answer, options)
    }

    /// Construye la pregunta con un orden de opciones ya decidido.
    pub fn with_options(
        text: String,
        correct_answer: String,
        options: Vec<String>,
    ) -> Result<Self, LoadError> {
        if options.len() != OPTION_COUNT {
            return Err(LoadError::Malformed(format!(
                "expected {OPTION_COUNT} options, got {}",
                options.len()
            )));
        }
        let unique: HashSet<&str> = options.iter().map(String::as_str).collect();
        if unique.len() != options.len() {
            return Err(LoadError::Malformed(format!(
                "duplicated options in question {text:?}"
            )));
        }
        if !unique.contains(correct_answer.as_str()) {
            return Err(LoadError::Malformed(format!(
                "correct answer missing from options in question {text:?}"
            )));
        }
        Ok(Self {
            text,
            correct_answer,
            options,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }

    pub fn is_correct(&self, value: &str) -> bool {
        self.correct_answer == value
    }
}

/// Lote de preguntas de una partida. Siempre tiene `QUIZ_LENGTH` elementos.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizBatch {
    questions: Vec<Question>,
}

impl QuizBatch {
    pub fn new(questions: Vec<Question>) -> Result<Self, LoadError> {
        if questions.len() != QUIZ_LENGTH {
            return Err(LoadError::Malformed(format!(
                "expected {QUIZ_LENGTH} questions, got {}",
                questions.len()
            )));
        }
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

/// Fase visible de la sesión, usada para despachar la vista.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Answering,
    Graded,
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn new_question_contains_every_answer_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let q = Question::new(
            "Capital of France?".into(),
            "Paris".into(),
            strings(&["Rome", "Madrid", "Berlin"]),
            &mut rng,
        )
        .unwrap();

        let mut sorted = q.options().to_vec();
        sorted.sort();
        assert_eq!(sorted, strings(&["Berlin", "Madrid", "Paris", "Rome"]));
        assert!(q.is_correct("Paris"));
        assert!(q.has_option("Rome"));
        assert!(!q.has_option("Lisbon"));
    }

    #[test]
    fn boolean_style_question_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = Question::new(
            "The sky is blue.".into(),
            "True".into(),
            strings(&["False"]),
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn duplicated_options_are_rejected() {
        let err = Question::with_options(
            "q".into(),
            "a".into(),
            strings(&["a", "b", "b", "c"]),
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn options_must_contain_correct_answer() {
        let err = Question::with_options(
            "q".into(),
            "z".into(),
            strings(&["a", "b", "c", "d"]),
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn batch_requires_exactly_five_questions() {
        let four: Vec<Question> = (0..4).map(|n| fixtures::question(n, "ok")).collect();
        assert!(matches!(QuizBatch::new(four), Err(LoadError::Malformed(_))));

        let batch = fixtures::batch(["A", "B", "C", "D", "E"]);
        assert_eq!(batch.len(), QUIZ_LENGTH);
        assert_eq!(batch.get(2).map(Question::correct_answer), Some("C"));
    }
}
