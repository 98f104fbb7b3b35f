mod auth;
mod course;
mod flashcard;
mod generation;
mod ids;
mod quiz;
mod score;

pub use auth::{AuthToken, Credentials, CredentialsError};
pub use course::{CourseDetails, CourseError, CourseName, CourseQuizRef, CourseSummary};
pub use flashcard::{Flashcard, FlashcardTopic};
pub use generation::{
    DEFAULT_FLASHCARD_COUNT, DEFAULT_QUIZ_QUESTION_COUNT, GenerationError, GenerationRequest,
};
pub use ids::{CourseId, ParseIdError, QuizId};
pub use quiz::{Question, Quiz, QuizListItem, QuizOption, QuizSection, QuizStatus};
pub use score::Score;
