use crate::model::Question;

/// Countdown start value for every question, in seconds.
pub const QUESTION_TIME_LIMIT_SECS: u32 = 5;

/// Result of a user answer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The selection was recorded; `correct` tells whether it scored.
    Recorded { correct: bool },
    /// The selection was dropped: the session is complete, there is no
    /// current question, or an earlier selection is still awaiting advance.
    Ignored,
}

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown decremented to the contained value.
    Counted(u32),
    /// The countdown ran out and the session advanced.
    Expired,
    /// The session is complete; ticks do nothing.
    Idle,
}

/// One run through a fetched question batch: current position, countdown,
/// selection, and score.
///
/// All transitions are total functions; the session has exactly one writer
/// and never panics, including on an empty question batch (which starts the
/// session in the completed state, since there is nothing to ask).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    seconds_remaining: u32,
    selected_answer: Option<String>,
    awaiting_advance: bool,
    score: u32,
    completed: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        let completed = questions.is_empty();
        Self {
            questions,
            current_index: 0,
            seconds_remaining: QUESTION_TIME_LIMIT_SECS,
            selected_answer: None,
            awaiting_advance: false,
            score: 0,
            completed,
        }
    }

    /// Record an answer selection for the current question.
    ///
    /// A second selection while one is already awaiting its advance delay is
    /// ignored, as is any selection once the session is complete.
    pub fn select_answer(&mut self, answer: &str) -> SelectionOutcome {
        if self.completed || self.awaiting_advance {
            return SelectionOutcome::Ignored;
        }
        let Some(question) = self.current_question() else {
            return SelectionOutcome::Ignored;
        };

        let correct = question.is_correct(answer);
        self.selected_answer = Some(answer.to_string());
        self.awaiting_advance = true;
        if correct {
            self.score += 1;
        }
        SelectionOutcome::Recorded { correct }
    }

    /// Complete a recorded selection after its delay: clear the highlight
    /// and move on.
    ///
    /// A no-op unless a selection is actually awaiting advance, so a stale
    /// delayed callback cannot advance twice.
    pub fn finish_advance(&mut self) {
        if !self.awaiting_advance {
            return;
        }
        self.advance();
    }

    /// Count the per-question timer down by one second.
    ///
    /// When the count would drop below zero the session advances instead.
    pub fn tick(&mut self) -> TickOutcome {
        if self.completed {
            return TickOutcome::Idle;
        }
        if self.seconds_remaining == 0 {
            self.advance();
            return TickOutcome::Expired;
        }
        self.seconds_remaining -= 1;
        TickOutcome::Counted(self.seconds_remaining)
    }

    /// Move to the next question, or mark the session complete when already
    /// on the last one. The index freezes at its last valid value.
    fn advance(&mut self) {
        self.selected_answer = None;
        self.awaiting_advance = false;

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.seconds_remaining = QUESTION_TIME_LIMIT_SECS;
        } else {
            self.completed = true;
        }
    }

    /// Reset position and score while keeping the fetched question batch.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.seconds_remaining = QUESTION_TIME_LIMIT_SECS;
        self.selected_answer = None;
        self.awaiting_advance = false;
        self.score = 0;
        self.completed = self.questions.is_empty();
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    #[must_use]
    pub fn is_awaiting_advance(&self) -> bool {
        self.awaiting_advance
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }
}
