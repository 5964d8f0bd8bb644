// src/data.rs

use crate::config::TriviaConfig;
use crate::error::LoadError;
use crate::model::{Question, QuizBatch};
use crate::text_utils::decode_html_entities;
use rand::Rng;
use serde::Deserialize;

/// Códigos de `response_code` de Open Trivia DB.
const CODE_SUCCESS: u8 = 0;
const CODE_NO_RESULTS: u8 = 1;
const CODE_RATE_LIMIT: u8 = 5;

#[derive(Debug, Deserialize)]
struct TriviaResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<TriviaItem>,
}

#[derive(Debug, Deserialize)]
struct TriviaItem {
    question: String,
    correct_answer: String,
    #[serde(default)]
    incorrect_answers: Vec<String>,
}

impl TriviaItem {
    fn into_question<R: Rng>(self, rng: &mut R) -> Result<Question, LoadError> {
        // Se guarda el texto decodificado: es lo que se muestra y lo que se compara
        let incorrect = self
            .incorrect_answers
            .iter()
            .map(|a| decode_html_entities(a))
            .collect();
        Question::new(
            decode_html_entities(&self.question),
            decode_html_entities(&self.correct_answer),
            incorrect,
            rng,
        )
    }
}

/// Convierte el cuerpo JSON del proveedor en un lote completo.
/// Nunca devuelve un lote a medias: o están las 5 preguntas o hay error.
pub fn parse_response<R: Rng>(body: &str, rng: &mut R) -> Result<QuizBatch, LoadError> {
    let response: TriviaResponse = serde_json::from_str(body)?;

    match response.response_code {
        CODE_SUCCESS => {}
        CODE_NO_RESULTS => return Err(LoadError::NoResults),
        CODE_RATE_LIMIT => return Err(LoadError::RateLimited),
        code => return Err(LoadError::Provider { code }),
    }

    let questions = response
        .results
        .into_iter()
        .map(|item| item.into_question(&mut *rng))
        .collect::<Result<Vec<_>, _>>()?;

    QuizBatch::new(questions)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_questions(config: &TriviaConfig) -> Result<QuizBatch, LoadError> {
    use reqwest::header::USER_AGENT;

    let url = config.request_url();
    log::info!("requesting questions from {url}");

    let client = reqwest::blocking::Client::new();
    let body = client
        .get(&url)
        .header(USER_AGENT, concat!("quizzical/", env!("CARGO_PKG_VERSION")))
        .send()?
        .error_for_status()?
        .text()?;

    parse_response(&body, &mut rand::rng())
}

#[cfg(target_arch = "wasm32")]
pub async fn load_questions(config: &TriviaConfig) -> Result<QuizBatch, LoadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let url = config.request_url();
    log::info!("requesting questions from {url}");

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
    let window =
        web_sys::window().ok_or_else(|| LoadError::Network("no window in WASM".into()))?;

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = value.dyn_into().map_err(js_error)?;

    if !response.ok() {
        return Err(LoadError::HttpStatus(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| LoadError::Network("response body is not text".into()))?;

    parse_response(&body, &mut rand::rng())
}

#[cfg(target_arch = "wasm32")]
fn js_error(err: wasm_bindgen::JsValue) -> LoadError {
    LoadError::Network(format!("{err:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QUIZ_LENGTH;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    fn item(n: usize) -> serde_json::Value {
        json!({
            "type": "multiple",
            "difficulty": "easy",
            "category": "General Knowledge",
            "question": format!("Question &quot;{n}&quot;?"),
            "correct_answer": format!("Right &amp; {n}"),
            "incorrect_answers": [
                format!("Wrong {n}a"),
                format!("Don&#039;t {n}"),
                format!("Wrong {n}c"),
            ]
        })
    }

    fn body(code: u8, count: usize) -> String {
        let results: Vec<_> = (0..count).map(item).collect();
        json!({ "response_code": code, "results": results }).to_string()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    #[test]
    fn parses_and_decodes_a_full_batch() {
        let batch = parse_response(&body(0, QUIZ_LENGTH), &mut rng()).unwrap();
        assert_eq!(batch.len(), QUIZ_LENGTH);

        let first = batch.get(0).unwrap();
        assert_eq!(first.text(), "Question \"0\"?");
        assert_eq!(first.correct_answer(), "Right & 0");
        assert!(first.has_option("Right & 0"));
        assert!(first.has_option("Don't 0"));
        assert_eq!(first.options().len(), 4);
    }

    #[test]
    fn no_results_code_is_an_error() {
        let err = parse_response(&body(1, 0), &mut rng()).unwrap_err();
        assert!(matches!(err, LoadError::NoResults));
    }

    #[test]
    fn rate_limit_and_other_codes_are_errors() {
        assert!(matches!(
            parse_response(&body(5, 0), &mut rng()),
            Err(LoadError::RateLimited)
        ));
        assert!(matches!(
            parse_response(&body(2, 0), &mut rng()),
            Err(LoadError::Provider { code: 2 })
        ));
    }

    #[test]
    fn short_batch_is_rejected_whole() {
        let err = parse_response(&body(0, 3), &mut rng()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn garbage_body_is_a_parse_error() {
        let err = parse_response("<html>oops</html>", &mut rng()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
