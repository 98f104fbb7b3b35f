#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod auth_service;
pub mod config;
pub mod course_service;
pub mod error;
pub mod flashcard_service;
pub mod quiz_service;
pub mod session_service;
pub mod upload;

pub use api::ApiClient;
pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use config::{API_URL_ENV, ApiConfig, DEFAULT_API_URL};
pub use course_service::CourseService;
pub use error::{ApiError, AppServicesError, ConfigError, RequestFailure, UploadError};
pub use flashcard_service::FlashcardService;
pub use quiz_service::QuizService;
pub use session_service::SessionService;
pub use upload::UploadFile;
