use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt is blank")]
    BlankPrompt,

    #[error("correct answer is blank")]
    BlankCorrectAnswer,

    #[error("question has no incorrect answers")]
    NoIncorrectAnswers,

    #[error("incorrect answer at position {index} is blank")]
    BlankIncorrectAnswer { index: usize },
}

/// A single multiple-choice question. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the prompt or any answer text is blank,
    /// or when there are no incorrect answers to choose among.
    pub fn new(
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: Vec<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::BlankPrompt);
        }

        let correct_answer = correct_answer.into();
        if correct_answer.trim().is_empty() {
            return Err(QuestionError::BlankCorrectAnswer);
        }

        if incorrect_answers.is_empty() {
            return Err(QuestionError::NoIncorrectAnswers);
        }
        for (index, answer) in incorrect_answers.iter().enumerate() {
            if answer.trim().is_empty() {
                return Err(QuestionError::BlankIncorrectAnswer { index });
            }
        }

        Ok(Self {
            prompt,
            correct_answer,
            incorrect_answers,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn incorrect_answers(&self) -> &[String] {
        &self.incorrect_answers
    }

    /// Answer options in presentation order: the incorrect answers in their
    /// fetched order, followed by the correct answer.
    #[must_use]
    pub fn options(&self) -> Vec<&str> {
        self.incorrect_answers
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.correct_answer.as_str()))
            .collect()
    }

    /// Exact-match comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incorrect() -> Vec<String> {
        vec!["B".into(), "C".into(), "D".into()]
    }

    #[test]
    fn options_list_correct_answer_last() {
        let question = Question::new("Q1", "A", incorrect()).unwrap();
        assert_eq!(question.options(), vec!["B", "C", "D", "A"]);
    }

    #[test]
    fn is_correct_requires_exact_match() {
        let question = Question::new("Q1", "A", incorrect()).unwrap();
        assert!(question.is_correct("A"));
        assert!(!question.is_correct("a"));
        assert!(!question.is_correct("B"));
    }

    #[test]
    fn rejects_blank_prompt() {
        let err = Question::new("   ", "A", incorrect()).unwrap_err();
        assert_eq!(err, QuestionError::BlankPrompt);
    }

    #[test]
    fn rejects_blank_correct_answer() {
        let err = Question::new("Q1", "", incorrect()).unwrap_err();
        assert_eq!(err, QuestionError::BlankCorrectAnswer);
    }

    #[test]
    fn rejects_missing_incorrect_answers() {
        let err = Question::new("Q1", "A", Vec::new()).unwrap_err();
        assert_eq!(err, QuestionError::NoIncorrectAnswers);
    }

    #[test]
    fn rejects_blank_incorrect_answer() {
        let answers = vec!["B".into(), " ".into(), "D".into()];
        let err = Question::new("Q1", "A", answers).unwrap_err();
        assert_eq!(err, QuestionError::BlankIncorrectAnswer { index: 1 });
    }
}
