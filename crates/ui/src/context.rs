use std::sync::Arc;

use services::QuestionSource;

use crate::vm::RestartMode;

pub trait UiApp: Send + Sync {
    fn question_source(&self) -> Arc<dyn QuestionSource>;
    fn restart_mode(&self) -> RestartMode;
}

#[derive(Clone)]
pub struct AppContext {
    question_source: Arc<dyn QuestionSource>,
    restart_mode: RestartMode,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_source: app.question_source(),
            restart_mode: app.restart_mode(),
        }
    }

    #[must_use]
    pub fn question_source(&self) -> Arc<dyn QuestionSource> {
        Arc::clone(&self.question_source)
    }

    #[must_use]
    pub fn restart_mode(&self) -> RestartMode {
        self.restart_mode
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
