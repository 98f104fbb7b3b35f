pub mod actions;
mod auth;
mod courses;
mod flashcards;
mod generate;
mod home;
mod quizzes;
mod scores;
mod state;
mod take_quiz;

pub use auth::{LoginView, RegisterView};
pub use courses::{CourseDetailsView, CoursesView, EditCourseView, NewCourseView};
pub use flashcards::{FlashcardTopicsView, FlashcardsView};
pub use generate::{GenerateFlashcardsView, GenerateQuizView};
pub use home::HomeView;
pub use quizzes::{DeleteQuizView, QuizDetailsView, QuizListView};
pub use scores::ScoresView;
pub use state::{
    LOGIN_REQUIRED_MESSAGE, SubmitState, ViewError, ViewState, view_state_from_resource,
};
pub use take_quiz::TakeQuizView;

#[cfg(test)]
mod course_form_smoke;
#[cfg(test)]
mod test_harness;
