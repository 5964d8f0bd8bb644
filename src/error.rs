//! Tipos de error del cargador y de la sesión.

use thiserror::Error;

/// Errores al pedir o interpretar un lote de preguntas.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("the trivia provider has no questions for these filters")]
    NoResults,
    #[error("the trivia provider is rate limiting requests")]
    RateLimited,
    #[error("the trivia provider answered with response code {code}")]
    Provider { code: u8 },
    #[error("trivia request failed with HTTP status {0}")]
    HttpStatus(u16),
    #[error("trivia request failed: {0}")]
    Network(String),
    #[error("invalid trivia response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unexpected trivia data: {0}")]
    Malformed(String),
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LoadError::HttpStatus(status.as_u16()),
            None => LoadError::Network(err.to_string()),
        }
    }
}

/// Transiciones rechazadas por la máquina de estados.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("`{action}` is not allowed while {state}")]
    InvalidState {
        action: &'static str,
        state: &'static str,
    },
    #[error("question {0} does not exist")]
    UnknownQuestion(usize),
    #[error("{value:?} is not an option of question {index}")]
    UnknownOption { index: usize, value: String },
    #[error("only {answered} of {required} questions have an answer")]
    Incomplete { answered: usize, required: usize },
}
