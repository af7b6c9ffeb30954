//! Shared error types for the services crate.

use thiserror::Error;

use trivia_core::model::QuestionError;

/// The one failure domain in the system: the question batch fetch.
///
/// All variants are handled identically at the call site (logged, then the
/// session proceeds with an empty batch); they are distinguished only for
/// the log line.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionFetchError {
    #[error("question request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("question batch contained an invalid entry: {0}")]
    InvalidQuestion(#[from] QuestionError),
}
