use std::sync::Arc;

use storage::repository::Storage;

use crate::api::ApiClient;
use crate::auth_service::AuthService;
use crate::config::ApiConfig;
use crate::course_service::CourseService;
use crate::error::AppServicesError;
use crate::flashcard_service::FlashcardService;
use crate::quiz_service::QuizService;
use crate::session_service::SessionService;

/// Assembles app-facing services over one session store and one API client.
#[derive(Clone)]
pub struct AppServices {
    session: Arc<SessionService>,
    auth: Arc<AuthService>,
    courses: Arc<CourseService>,
    quizzes: Arc<QuizService>,
    flashcards: Arc<FlashcardService>,
}

impl AppServices {
    /// Build services whose session token is persisted in `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, config: ApiConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, config))
    }

    /// Build services with a session that lives only as long as the process.
    #[must_use]
    pub fn in_memory(config: ApiConfig) -> Self {
        Self::from_storage(&Storage::in_memory(), config)
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, config: ApiConfig) -> Self {
        let session = SessionService::new(Arc::clone(&storage.session));
        let api = ApiClient::new(config, session.clone());

        Self {
            session: Arc::new(session),
            auth: Arc::new(AuthService::new(api.clone())),
            courses: Arc::new(CourseService::new(api.clone())),
            quizzes: Arc::new(QuizService::new(api.clone())),
            flashcards: Arc::new(FlashcardService::new(api)),
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
