use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use trivia_core::Clock;
use trivia_core::model::Question;

use crate::error::QuestionFetchError;
use crate::rate_gate::FetchRateGate;

/// The question-bank endpoint queried for every batch.
pub const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";

/// Fixed batch size: one session is always ten multiple-choice questions.
pub const QUESTIONS_PER_BATCH: u32 = 10;

/// Source of question batches. The UI depends on this as a trait object so
/// tests can substitute a canned batch for the remote API.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch one fixed-size batch of multiple-choice questions.
    ///
    /// # Errors
    ///
    /// Returns `QuestionFetchError` on transport failure, a non-success
    /// HTTP status, or a malformed question entry.
    async fn fetch_batch(&self) -> Result<Vec<Question>, QuestionFetchError>;
}

#[derive(Clone, Debug)]
pub struct OpenTriviaConfig {
    pub base_url: String,
}

impl Default for OpenTriviaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.into(),
        }
    }
}

/// Open Trivia DB client: one GET per batch, spaced by the rate gate.
pub struct OpenTriviaService {
    client: Client,
    config: OpenTriviaConfig,
    clock: Clock,
    gate: FetchRateGate,
}

impl OpenTriviaService {
    #[must_use]
    pub fn new(clock: Clock, config: OpenTriviaConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            clock,
            gate: FetchRateGate::new(),
        }
    }
}

#[async_trait]
impl QuestionSource for OpenTriviaService {
    async fn fetch_batch(&self) -> Result<Vec<Question>, QuestionFetchError> {
        let wait = self.gate.reserve(self.clock.now());
        if !wait.is_zero() {
            tracing::debug!(delay_ms = wait.as_millis() as u64, "rate gate delaying fetch");
            tokio::time::sleep(wait).await;
        }

        let url = format!(
            "{}?amount={QUESTIONS_PER_BATCH}&type=multiple",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(QuestionFetchError::HttpStatus(response.status()));
        }

        let body: BatchResponse = response.json().await?;
        body.results.into_iter().map(QuestionDto::into_question).collect()
    }
}

#[derive(Debug, Deserialize)]
struct BatchResponse {
    results: Vec<QuestionDto>,
}

#[derive(Debug, Deserialize)]
struct QuestionDto {
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

impl QuestionDto {
    fn into_question(self) -> Result<Question, QuestionFetchError> {
        Question::new(self.question, self.correct_answer, self.incorrect_answers)
            .map_err(QuestionFetchError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BATCH_JSON: &str = r#"{
        "results": [
            {
                "question": "Q1",
                "correct_answer": "A",
                "incorrect_answers": ["B", "C", "D"]
            },
            {
                "question": "Q2",
                "correct_answer": "X",
                "incorrect_answers": ["Y", "Z", "W"]
            }
        ]
    }"#;

    #[test]
    fn parses_the_documented_wire_shape() {
        let body: BatchResponse = serde_json::from_str(BATCH_JSON).unwrap();
        assert_eq!(body.results.len(), 2);

        let question = body.results.into_iter().next().unwrap().into_question().unwrap();
        assert_eq!(question.prompt(), "Q1");
        assert_eq!(question.options(), vec!["B", "C", "D", "A"]);
    }

    #[test]
    fn blank_entry_maps_to_fetch_error() {
        let json = r#"{"results": [{"question": "", "correct_answer": "A", "incorrect_answers": ["B"]}]}"#;
        let body: BatchResponse = serde_json::from_str(json).unwrap();
        let err = body.results.into_iter().next().unwrap().into_question().unwrap_err();
        assert!(matches!(err, QuestionFetchError::InvalidQuestion(_)));
    }

    #[test]
    fn missing_results_field_is_a_parse_failure() {
        let parsed = serde_json::from_str::<BatchResponse>(r#"{"response_code": 0}"#);
        assert!(parsed.is_err());
    }
}
