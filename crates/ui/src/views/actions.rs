//! Mutations triggered from forms and buttons.
//!
//! Each action returns the route to navigate to on success. Failures carry
//! the message the page should show.

use quiz_core::model::{CourseId, CourseName, Credentials, Quiz, QuizId};
use quiz_core::scoring::AnswerSheet;
use services::{AuthService, CourseService, QuizService, UploadFile};
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{GenerationForm, GenerationKind};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const CREATE_COURSE_FAILED: &str = "Error creating course.";
pub const UPDATE_COURSE_FAILED: &str = "Error updating course.";
pub const DELETE_COURSE_FAILED: &str = "Error deleting course.";
pub const SUBMIT_QUIZ_FAILED: &str = "Error submitting quiz.";
pub const DELETE_QUIZ_FAILED: &str = "Error deleting quiz.";

fn invalid(err: impl Into<quiz_core::Error>) -> ViewError {
    ViewError::Failed(err.into().to_string())
}

/// # Errors
///
/// Returns the backend's detail, or "Login failed".
pub async fn login(auth: &AuthService, username: &str, password: &str) -> Result<Route, ViewError> {
    let credentials = Credentials::new(username.trim(), password).map_err(invalid)?;
    auth.login(&credentials)
        .await
        .map_err(|err| ViewError::from_api(&err, LOGIN_FAILED))?;
    Ok(Route::Courses {})
}

/// # Errors
///
/// Returns the backend's detail, or "Registration failed".
pub async fn register(
    auth: &AuthService,
    username: &str,
    password: &str,
) -> Result<Route, ViewError> {
    let credentials = Credentials::new(username.trim(), password).map_err(invalid)?;
    auth.register(&credentials)
        .await
        .map_err(|err| ViewError::from_api(&err, REGISTER_FAILED))?;
    Ok(Route::Login {})
}

/// # Errors
///
/// Returns the backend's detail, or "Error creating course.".
pub async fn create_course(courses: &CourseService, name: &str) -> Result<Route, ViewError> {
    let name = CourseName::new(name).map_err(invalid)?;
    courses
        .create(&name)
        .await
        .map_err(|err| ViewError::from_api(&err, CREATE_COURSE_FAILED))?;
    Ok(Route::Courses {})
}

/// # Errors
///
/// Returns the backend's detail, or "Error updating course.".
pub async fn rename_course(
    courses: &CourseService,
    course_id: &CourseId,
    name: &str,
) -> Result<Route, ViewError> {
    let name = CourseName::new(name).map_err(invalid)?;
    courses
        .rename(course_id, &name)
        .await
        .map_err(|err| ViewError::from_api(&err, UPDATE_COURSE_FAILED))?;
    Ok(Route::CourseDetails {
        course_id: course_id.clone(),
    })
}

/// # Errors
///
/// Returns the backend's detail, or "Error deleting course.".
pub async fn delete_course(courses: &CourseService, course_id: &CourseId) -> Result<Route, ViewError> {
    courses
        .delete(course_id)
        .await
        .map_err(|err| ViewError::from_api(&err, DELETE_COURSE_FAILED))?;
    Ok(Route::Courses {})
}

/// Grades the attempt, submits it and opens the score list.
///
/// # Errors
///
/// Returns `ViewError::LoginRequired` when logged out, otherwise
/// "Error submitting quiz.".
pub async fn submit_quiz(
    quizzes: &QuizService,
    course_id: &CourseId,
    quiz_id: &QuizId,
    quiz: &Quiz,
    answers: &AnswerSheet,
) -> Result<Route, ViewError> {
    quizzes
        .submit_answers(quiz_id, quiz, answers)
        .await
        .map_err(|err| ViewError::from_load(&err, SUBMIT_QUIZ_FAILED))?;
    Ok(Route::Scores {
        course_id: course_id.clone(),
        quiz_id: quiz_id.clone(),
    })
}

/// # Errors
///
/// Returns `ViewError::LoginRequired` when logged out, otherwise
/// "Error deleting quiz.".
pub async fn delete_quiz(
    quizzes: &QuizService,
    course_id: &CourseId,
    quiz_id: &QuizId,
) -> Result<Route, ViewError> {
    quizzes
        .delete(course_id, quiz_id)
        .await
        .map_err(|err| ViewError::from_load(&err, DELETE_QUIZ_FAILED))?;
    Ok(Route::Quizzes {
        course_id: course_id.clone(),
    })
}

/// Uploads the chosen document and generates a quiz or flashcards from it.
///
/// The session is checked before the form so a logged-out user is told to
/// log in rather than to pick a file.
///
/// # Errors
///
/// Returns `ViewError::LoginRequired`, a form validation message, or the
/// backend's detail falling back to the kind's failure message.
pub async fn generate(
    ctx: &AppContext,
    kind: GenerationKind,
    course_id: &CourseId,
    form: &GenerationForm,
) -> Result<Route, ViewError> {
    let logged_in = ctx.session().is_logged_in().await.map_err(|err| {
        warn!(error = %err, "session store unavailable");
        ViewError::Failed(kind.failure_message().to_string())
    })?;
    if !logged_in {
        return Err(ViewError::LoginRequired);
    }

    let request = form.validate()?;
    let file = UploadFile::from_path(&form.file_path)
        .await
        .map_err(|err| ViewError::Failed(err.to_string()))?;

    let course_id = course_id.clone();
    match kind {
        GenerationKind::Quiz => {
            ctx.quizzes()
                .generate(&course_id, &request, file)
                .await
                .map_err(|err| ViewError::from_api(&err, kind.failure_message()))?;
            Ok(Route::Quizzes { course_id })
        }
        GenerationKind::Flashcards => {
            ctx.flashcards()
                .generate(&course_id, &request, file)
                .await
                .map_err(|err| ViewError::from_api(&err, kind.failure_message()))?;
            Ok(Route::FlashcardTopics { course_id })
        }
    }
}
