use std::time::Duration;

use dioxus::prelude::*;

use trivia_core::model::{SelectionOutcome, TickOutcome};

use crate::context::AppContext;
use crate::vm::{AnswerOptionVm, QuizVm, RestartOutcome, SELECTION_HOLD_MS};

/// The single quiz view. Owns the two cancellable timer handles: the
/// per-question countdown and the post-selection advance delay. Any
/// transition that changes what should happen next cancels the existing
/// handle before scheduling a new one; a stale handle must never fire
/// against the following question.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let source = ctx.question_source();
    let restart_mode = ctx.restart_mode();

    let vm = use_signal(|| None::<QuizVm>);
    let countdown = use_signal(|| None::<Task>);
    let pending_advance = use_signal(|| None::<Task>);

    let mut resource = use_resource(move || {
        let source = source.clone();
        let mut vm = vm;
        async move {
            let batch = match source.fetch_batch().await {
                Ok(batch) => batch,
                Err(err) => {
                    // The one failure in the system: log it and carry on
                    // with an empty batch. No distinct error state exists.
                    tracing::warn!(error = %err, "question fetch failed");
                    Vec::new()
                }
            };
            let mut guard = vm.write();
            match guard.as_mut() {
                Some(existing) => existing.install_batch(batch),
                None => *guard = Some(QuizVm::new(batch)),
            }
        }
    });

    // The countdown is keyed on (question index, completed): it restarts
    // from scratch whenever either changes, and only then.
    let timer_key = use_memo(move || {
        vm.read()
            .as_ref()
            .map(|vm| (vm.current_index(), vm.is_complete()))
    });

    use_effect(move || {
        let key = timer_key();
        let mut countdown = countdown;
        if let Some(stale) = countdown.write().take() {
            stale.cancel();
        }
        let Some((_, completed)) = key else {
            return;
        };
        if completed {
            return;
        }
        let mut vm = vm;
        let task = spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                let outcome = {
                    let mut guard = vm.write();
                    match guard.as_mut() {
                        Some(vm) => vm.tick(),
                        None => break,
                    }
                };
                // An advance changes the timer key; the rescheduled task
                // takes over from there.
                if !matches!(outcome, TickOutcome::Counted(_)) {
                    break;
                }
            }
        });
        countdown.write().replace(task);
    });

    let select_answer = use_callback(move |answer: String| {
        let mut vm = vm;
        let mut pending_advance = pending_advance;

        let outcome = {
            let mut guard = vm.write();
            match guard.as_mut() {
                Some(vm) => vm.select_answer(&answer),
                None => return,
            }
        };
        if !matches!(outcome, SelectionOutcome::Recorded { .. }) {
            return;
        }

        if let Some(stale) = pending_advance.write().take() {
            stale.cancel();
        }
        let task = spawn(async move {
            tokio::time::sleep(Duration::from_millis(SELECTION_HOLD_MS)).await;
            if let Some(vm) = vm.write().as_mut() {
                vm.finish_advance();
            }
        });
        pending_advance.write().replace(task);
    });

    let restart_quiz = use_callback(move |()| {
        let mut vm = vm;
        let mut pending_advance = pending_advance;
        if let Some(stale) = pending_advance.write().take() {
            stale.cancel();
        }
        let outcome = {
            let mut guard = vm.write();
            guard.as_mut().map(|vm| vm.restart(restart_mode))
        };
        if outcome == Some(RestartOutcome::NeedsRefetch) {
            resource.restart();
        }
    });

    let toggle_theme = use_callback(move |()| {
        let mut vm = vm;
        if let Some(vm) = vm.write().as_mut() {
            vm.toggle_theme();
        }
    });

    let reveal_score_card = use_callback(move |()| {
        let mut vm = vm;
        if let Some(vm) = vm.write().as_mut() {
            vm.reveal_score_card();
        }
    });

    let loading = matches!(resource.state().cloned(), UseResourceState::Pending);
    let theme_class = vm
        .read()
        .as_ref()
        .map_or_else(|| "light-theme", |vm| vm.theme().css_class());
    let snapshot = vm.read().as_ref().map(QuizVm::snapshot);

    rsx! {
        div { class: "app {theme_class}",
            header { class: "topbar",
                h1 { "Trivia Quiz" }
                button {
                    id: "theme-toggle",
                    onclick: move |_| toggle_theme.call(()),
                    "Toggle Theme"
                }
            }
            if loading {
                p { class: "loading", "Loading questions..." }
            } else {
                match snapshot {
                    None => rsx! {
                        p { class: "loading", "Loading questions..." }
                    },
                    Some(snap) if !snap.has_questions => rsx! {
                        p { class: "notice",
                            "No questions available. Restart the app to try again."
                        }
                    },
                    Some(snap) => {
                        let prompt = snap.prompt.clone().unwrap_or_default();
                        rsx! {
                            div { class: "quiz",
                                h2 { class: "position", "{snap.position_label}" }
                                if !snap.completed {
                                    h3 { class: "prompt", "{prompt}" }
                                    ul { class: "options",
                                        for (index, option) in snap.options.iter().enumerate() {
                                            AnswerOption {
                                                key: "{index}",
                                                option: option.clone(),
                                                on_select: select_answer,
                                            }
                                        }
                                    }
                                    p { id: "quiz-timer", class: "timer",
                                        "Time left: {snap.seconds_remaining} seconds"
                                    }
                                }
                                if snap.completed && !snap.score_card_visible {
                                    button {
                                        id: "show-score",
                                        onclick: move |_| reveal_score_card.call(()),
                                        "Show Score"
                                    }
                                }
                                if snap.completed && snap.score_card_visible {
                                    div { class: "score-card",
                                        h2 { "Quiz Completed!" }
                                        p { id: "final-score",
                                            "Your final score: {snap.score_line}"
                                        }
                                        button {
                                            id: "restart-quiz",
                                            onclick: move |_| restart_quiz.call(()),
                                            "Restart Quiz"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AnswerOption(option: AnswerOptionVm, on_select: Callback<String>) -> Element {
    let class = if option.selected {
        "option selected"
    } else {
        "option"
    };
    rsx! {
        li {
            class: "{class}",
            onclick: {
                let text = option.text.clone();
                move |_| on_select.call(text.clone())
            },
            "{option.text}"
        }
    }
}
