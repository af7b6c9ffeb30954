mod quiz_vm;

pub use quiz_vm::{
    AnswerOptionVm, QuizSnapshot, QuizVm, RestartMode, RestartOutcome, SELECTION_HOLD_MS,
};
