use crate::config::TriviaConfig;
use crate::error::LoadError;
use crate::model::QuizBatch;
use std::sync::mpsc::Receiver;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

// Submódulos
pub mod actions;
pub mod loading;
pub mod session;
pub mod warning;

pub use session::{AnswerRecord, QuizSession, SessionState, Selections, score_answers};
pub use warning::{TransientWarning, WARNING_SECONDS};

pub type LoadResult = Result<QuizBatch, LoadError>;

/// Función que trae un lote; corre en un hilo aparte.
#[cfg(not(target_arch = "wasm32"))]
pub type Loader = Arc<dyn Fn(&TriviaConfig) -> LoadResult + Send + Sync>;

pub struct QuizApp {
    pub session: QuizSession,
    pub config: TriviaConfig,
    pub warning: TransientWarning,
    /// Último error de carga, se muestra en la portada.
    pub message: String,
    pending_load: Option<Receiver<LoadResult>>,
    #[cfg(not(target_arch = "wasm32"))]
    loader: Loader,
}

impl QuizApp {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(config: TriviaConfig) -> Self {
        Self::with_loader(config, Arc::new(crate::data::load_questions))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(config: TriviaConfig) -> Self {
        Self {
            session: QuizSession::new(),
            config,
            warning: TransientWarning::default(),
            message: String::new(),
            pending_load: None,
        }
    }

    /// Igual que `new` pero con otra fuente de preguntas.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_loader(config: TriviaConfig, loader: Loader) -> Self {
        Self {
            session: QuizSession::new(),
            config,
            warning: TransientWarning::default(),
            message: String::new(),
            pending_load: None,
            loader,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new(TriviaConfig::default())
    }
}
