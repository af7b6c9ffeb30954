use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use services::{QuestionFetchError, QuestionSource};
use trivia_core::model::Question;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::vm::RestartMode;

struct FakeSource {
    batch: Result<Vec<Question>, ()>,
}

#[async_trait]
impl QuestionSource for FakeSource {
    async fn fetch_batch(&self) -> Result<Vec<Question>, QuestionFetchError> {
        match &self.batch {
            Ok(batch) => Ok(batch.clone()),
            // Any fetch error will do: the view treats them all the same.
            Err(()) => Err(Question::new("", "A", vec!["B".into()])
                .expect_err("blank prompt must fail validation")
                .into()),
        }
    }
}

struct TestApp {
    source: Arc<FakeSource>,
}

impl UiApp for TestApp {
    fn question_source(&self) -> Arc<dyn QuestionSource> {
        Arc::clone(&self.source) as Arc<dyn QuestionSource>
    }

    fn restart_mode(&self) -> RestartMode {
        RestartMode::ReuseBatch
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<dyn UiApp>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn Harness(props: HarnessProps) -> Element {
    use_context_provider(|| build_app_context(&props.app));
    rsx! { QuizView {} }
}

fn harness_dom(batch: Result<Vec<Question>, ()>) -> VirtualDom {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        source: Arc::new(FakeSource { batch }),
    });
    VirtualDom::new_with_props(Harness, HarnessProps { app })
}

async fn drive(dom: &mut VirtualDom) {
    for _ in 0..4 {
        let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);
        dom.process_events();
    }
}

fn ten_questions() -> Vec<Question> {
    (1..=10)
        .map(|n| {
            Question::new(
                format!("Q{n}"),
                "A",
                vec!["B".into(), "C".into(), "D".into()],
            )
            .unwrap()
        })
        .collect()
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_renders_first_question_after_fetch() {
    let mut dom = harness_dom(Ok(ten_questions()));
    dom.rebuild_in_place();
    drive(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Question 1 / 10"), "missing header in {html}");
    assert!(html.contains("Q1"), "missing prompt in {html}");
    assert!(
        html.contains("Time left: 5 seconds"),
        "missing timer in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_renders_notice_when_fetch_fails() {
    let mut dom = harness_dom(Err(()));
    dom.rebuild_in_place();
    drive(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert!(
        html.contains("No questions available"),
        "missing empty-batch notice in {html}"
    );
}
