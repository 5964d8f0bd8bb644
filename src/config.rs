// src/config.rs

use crate::model::QUIZ_LENGTH;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_ENDPOINT: &str = "https://opentdb.com/api.php";
/// "General Knowledge" en Open Trivia DB.
pub const DEFAULT_CATEGORY: u32 = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty {other:?}")),
        }
    }
}

/// Parámetros de la petición al proveedor de preguntas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriviaConfig {
    pub endpoint: String,
    pub category: u32,
    pub difficulty: Difficulty,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            category: DEFAULT_CATEGORY,
            difficulty: Difficulty::Easy,
        }
    }
}

impl TriviaConfig {
    /// URL completa; `type=multiple` garantiza 3 respuestas incorrectas por pregunta.
    pub fn request_url(&self) -> String {
        format!(
            "{}?amount={}&category={}&difficulty={}&type=multiple",
            self.endpoint.trim_end_matches('/'),
            QUIZ_LENGTH,
            self.category,
            self.difficulty
        )
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// En web solo se puede fijar el endpoint al compilar.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "QUIZZICAL_ENDPOINT" => option_env!("QUIZZICAL_ENDPOINT").map(str::to_string),
            _ => None,
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(endpoint) = lookup("QUIZZICAL_ENDPOINT").filter(|s| !s.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }

        if let Some(raw) = lookup("QUIZZICAL_CATEGORY") {
            match raw.trim().parse::<u32>() {
                Ok(category) => config.category = category,
                Err(err) => log::warn!("ignoring QUIZZICAL_CATEGORY={raw:?}: {err}"),
            }
        }

        if let Some(raw) = lookup("QUIZZICAL_DIFFICULTY") {
            match raw.parse::<Difficulty>() {
                Ok(difficulty) => config.difficulty = difficulty,
                Err(err) => log::warn!("ignoring QUIZZICAL_DIFFICULTY: {err}"),
            }
        }

        config
    }
}
