mod question;
mod session;
mod theme;

pub use question::{Question, QuestionError};
pub use session::{QUESTION_TIME_LIMIT_SECS, QuizSession, SelectionOutcome, TickOutcome};
pub use theme::Theme;
