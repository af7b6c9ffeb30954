#![forbid(unsafe_code)]

pub mod error;
pub mod question_service;
pub mod rate_gate;

pub use trivia_core::Clock;

pub use error::QuestionFetchError;
pub use question_service::{
    DEFAULT_API_URL, OpenTriviaConfig, OpenTriviaService, QUESTIONS_PER_BATCH, QuestionSource,
};
pub use rate_gate::{FETCH_MIN_INTERVAL_MS, FetchRateGate};
