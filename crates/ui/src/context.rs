use std::sync::Arc;

use services::{AuthService, CourseService, FlashcardService, QuizService, SessionService};

/// Services the views need, supplied by the composition root.
pub trait UiApp: Send + Sync {
    fn session(&self) -> Arc<SessionService>;
    fn auth(&self) -> Arc<AuthService>;
    fn courses(&self) -> Arc<CourseService>;
    fn quizzes(&self) -> Arc<QuizService>;
    fn flashcards(&self) -> Arc<FlashcardService>;
}

#[derive(Clone)]
pub struct AppContext {
    session: Arc<SessionService>,
    auth: Arc<AuthService>,
    courses: Arc<CourseService>,
    quizzes: Arc<QuizService>,
    flashcards: Arc<FlashcardService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session: app.session(),
            auth: app.auth(),
            courses: app.courses(),
            quizzes: app.quizzes(),
            flashcards: app.flashcards(),
        }
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionService> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn courses(&self) -> Arc<CourseService> {
        Arc::clone(&self.courses)
    }

    #[must_use]
    pub fn quizzes(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }

    #[must_use]
    pub fn flashcards(&self) -> Arc<FlashcardService> {
        Arc::clone(&self.flashcards)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
