use trivia_core::model::{Question, QuizSession, SelectionOutcome, Theme, TickOutcome};

/// How long a recorded selection stays highlighted before the session moves
/// on, in milliseconds.
pub const SELECTION_HOLD_MS: u64 = 1000;

/// What a restart request should do with the question batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RestartMode {
    /// Replay the already-fetched batch (the observed behavior).
    #[default]
    ReuseBatch,
    /// Ask for a fresh batch before the next run.
    Refetch,
}

impl RestartMode {
    #[must_use]
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "reuse" => Some(Self::ReuseBatch),
            "refetch" => Some(Self::Refetch),
            _ => None,
        }
    }
}

/// What the view must do after a restart request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestartOutcome {
    /// The session was reset in place; nothing more to do.
    Reset,
    /// The caller must fetch a fresh batch and install it.
    NeedsRefetch,
}

/// One answer option ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOptionVm {
    pub text: String,
    pub selected: bool,
}

/// Plain rendering snapshot of the controller state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSnapshot {
    pub has_questions: bool,
    pub position_label: String,
    pub prompt: Option<String>,
    pub options: Vec<AnswerOptionVm>,
    pub seconds_remaining: u32,
    pub completed: bool,
    pub score_card_visible: bool,
    pub score_line: String,
}

/// The quiz session controller surface consumed by the view: the session
/// state machine plus the presentation-only bits (theme, score card).
pub struct QuizVm {
    session: QuizSession,
    theme: Theme,
    score_card_visible: bool,
}

impl QuizVm {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            session: QuizSession::new(questions),
            theme: Theme::default(),
            score_card_visible: false,
        }
    }

    /// Replace the question batch with a freshly fetched one and start over.
    ///
    /// Theme and score-card visibility are deliberately untouched: the first
    /// is independent of quiz state, the second only resets when a new run
    /// actually completes.
    pub fn install_batch(&mut self, questions: Vec<Question>) {
        self.session = QuizSession::new(questions);
    }

    pub fn select_answer(&mut self, answer: &str) -> SelectionOutcome {
        self.session.select_answer(answer)
    }

    pub fn finish_advance(&mut self) {
        self.session.finish_advance();
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.session.tick()
    }

    /// Handle a restart request according to the configured mode.
    pub fn restart(&mut self, mode: RestartMode) -> RestartOutcome {
        match mode {
            RestartMode::ReuseBatch => {
                self.session.restart();
                RestartOutcome::Reset
            }
            RestartMode::Refetch => RestartOutcome::NeedsRefetch,
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn reveal_score_card(&mut self) {
        self.score_card_visible = true;
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn score_card_visible(&self) -> bool {
        self.score_card_visible
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session.current_index()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        let session = &self.session;
        let total = session.question_count();
        let options = session.current_question().map_or_else(Vec::new, |question| {
            question
                .options()
                .into_iter()
                .map(|text| AnswerOptionVm {
                    selected: session.selected_answer() == Some(text),
                    text: text.to_string(),
                })
                .collect()
        });

        QuizSnapshot {
            has_questions: total > 0,
            position_label: format!("Question {} / {total}", session.current_index() + 1),
            prompt: session
                .current_question()
                .map(|question| question.prompt().to_string()),
            options,
            seconds_remaining: session.seconds_remaining(),
            completed: session.is_complete(),
            score_card_visible: self.score_card_visible,
            score_line: format!("{} / {total}", session.score()),
        }
    }
}
