//! Máquina de estados de una partida: Idle → Loading → Answering → Graded.

use crate::error::{LoadError, SessionError};
use crate::model::{Phase, QUIZ_LENGTH, QuizBatch};
use std::collections::BTreeSet;

/// Respuestas congeladas al corregir, una por pregunta.
pub type AnswerRecord = Vec<Option<String>>;

/// Valor elegido por pregunta y conjunto de preguntas tocadas.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selections {
    chosen: Vec<Option<String>>,
    touched: BTreeSet<usize>,
}

impl Selections {
    fn for_batch(batch: &QuizBatch) -> Self {
        Self {
            chosen: vec![None; batch.len()],
            touched: BTreeSet::new(),
        }
    }

    /// Preguntas con al menos una interacción.
    pub fn answered(&self) -> usize {
        self.touched.len()
    }

    pub fn is_touched(&self, index: usize) -> bool {
        self.touched.contains(&index)
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.chosen.get(index).and_then(|v| v.as_deref())
    }

    fn record(&mut self, index: usize, value: String) {
        self.chosen[index] = Some(value);
        self.touched.insert(index);
    }

    fn snapshot(&self) -> AnswerRecord {
        self.chosen.clone()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Answering {
        batch: QuizBatch,
        selections: Selections,
    },
    Graded {
        batch: QuizBatch,
        answers: AnswerRecord,
        score: usize,
    },
}

impl SessionState {
    pub fn phase(&self) -> Phase {
        match self {
            SessionState::Idle => Phase::Idle,
            SessionState::Loading => Phase::Loading,
            SessionState::Answering { .. } => Phase::Answering,
            SessionState::Graded { .. } => Phase::Graded,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Loading => "loading",
            SessionState::Answering { .. } => "answering",
            SessionState::Graded { .. } => "graded",
        }
    }
}

/// Cuenta las posiciones donde la respuesta coincide con la correcta.
pub fn score_answers(batch: &QuizBatch, answers: &[Option<String>]) -> usize {
    batch
        .iter()
        .zip(answers)
        .filter(|(q, answer)| answer.as_deref().is_some_and(|a| q.is_correct(a)))
        .count()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizSession {
    state: SessionState,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn batch(&self) -> Option<&QuizBatch> {
        match &self.state {
            SessionState::Answering { batch, .. } | SessionState::Graded { batch, .. } => {
                Some(batch)
            }
            SessionState::Idle | SessionState::Loading => None,
        }
    }

    pub fn selections(&self) -> Option<&Selections> {
        match &self.state {
            SessionState::Answering { selections, .. } => Some(selections),
            _ => None,
        }
    }

    pub fn answered_count(&self) -> usize {
        self.selections().map_or(0, Selections::answered)
    }

    pub fn selected(&self, index: usize) -> Option<&str> {
        match &self.state {
            SessionState::Answering { selections, .. } => selections.value(index),
            SessionState::Graded { answers, .. } => answers.get(index).and_then(|a| a.as_deref()),
            SessionState::Idle | SessionState::Loading => None,
        }
    }

    pub fn answers(&self) -> Option<&[Option<String>]> {
        match &self.state {
            SessionState::Graded { answers, .. } => Some(answers),
            _ => None,
        }
    }

    pub fn score(&self) -> Option<usize> {
        match &self.state {
            SessionState::Graded { score, .. } => Some(*score),
            _ => None,
        }
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::InvalidState {
            action,
            state: self.state.name(),
        }
    }

    /// Idle → Loading. Quien llama lanza la carga.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::Idle {
            return Err(self.invalid("start"));
        }
        log::debug!("session: idle -> loading");
        self.state = SessionState::Loading;
        Ok(())
    }

    /// Entrega el resultado de la carga. Con error se vuelve a Idle sin lote.
    /// Un resultado que llega fuera de Loading se descarta.
    pub fn finish_loading(
        &mut self,
        result: Result<QuizBatch, LoadError>,
    ) -> Result<(), LoadError> {
        if self.state != SessionState::Loading {
            log::warn!(
                "discarding load result received while {}",
                self.state.name()
            );
            return Ok(());
        }

        match result {
            Ok(batch) => {
                log::debug!("session: loading -> answering");
                let selections = Selections::for_batch(&batch);
                self.state = SessionState::Answering { batch, selections };
                Ok(())
            }
            Err(err) => {
                log::debug!("session: loading -> idle");
                self.state = SessionState::Idle;
                Err(err)
            }
        }
    }

    /// Marca la pregunta como respondida. Cambiar de opción no la desmarca.
    pub fn select_option(&mut self, index: usize, value: &str) -> Result<(), SessionError> {
        let name = self.state.name();
        let SessionState::Answering { batch, selections } = &mut self.state else {
            return Err(SessionError::InvalidState {
                action: "select_option",
                state: name,
            });
        };

        let question = batch
            .get(index)
            .ok_or(SessionError::UnknownQuestion(index))?;
        if !question.has_option(value) {
            return Err(SessionError::UnknownOption {
                index,
                value: value.to_string(),
            });
        }

        selections.record(index, value.to_string());
        Ok(())
    }

    pub fn can_grade(&self) -> bool {
        self.selections()
            .is_some_and(|s| s.answered() == QUIZ_LENGTH)
    }

    /// Answering → Graded, solo con las 5 preguntas respondidas.
    /// Devuelve la puntuación.
    pub fn grade(&mut self) -> Result<usize, SessionError> {
        match std::mem::take(&mut self.state) {
            SessionState::Answering { batch, selections }
                if selections.answered() == QUIZ_LENGTH =>
            {
                let answers = selections.snapshot();
                let score = score_answers(&batch, &answers);
                log::debug!("session: answering -> graded ({score}/{QUIZ_LENGTH})");
                self.state = SessionState::Graded {
                    batch,
                    answers,
                    score,
                };
                Ok(score)
            }
            other => {
                self.state = other;
                match &self.state {
                    SessionState::Answering { selections, .. } => Err(SessionError::Incomplete {
                        answered: selections.answered(),
                        required: QUIZ_LENGTH,
                    }),
                    _ => Err(self.invalid("grade")),
                }
            }
        }
    }

    /// Graded → Loading. El lote anterior se descarta; hay que pedir otro.
    pub fn replay(&mut self) -> Result<(), SessionError> {
        if !matches!(self.state, SessionState::Graded { .. }) {
            return Err(self.invalid("replay"));
        }
        log::debug!("session: graded -> loading");
        self.state = SessionState::Loading;
        Ok(())
    }
}
