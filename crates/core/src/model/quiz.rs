use serde::{Deserialize, Serialize};

use crate::model::ids::{CourseId, QuizId};

/// One answer choice of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    /// The first option flagged correct, if any.
    #[must_use]
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.is_correct)
    }
}

/// A titled group of questions. Generated quizzes usually hold a single section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSection {
    pub title: String,
    pub questions: Vec<Question>,
}

/// Quiz as returned by `GET /quizzes/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub topic: String,
    #[serde(rename = "questions")]
    pub sections: Vec<QuizSection>,
}

impl Quiz {
    /// Questions that count toward the score.
    ///
    /// Only the first section is graded; the backend derives
    /// `percentage_score` from the same set.
    #[must_use]
    pub fn gradable_questions(&self) -> &[Question] {
        self.sections
            .first()
            .map_or(&[], |section| section.questions.as_slice())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuizStatus {
    NotTaken,
    Completed { percentage: f64 },
}

/// Quiz entry in a course listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizListItem {
    #[serde(rename = "_id")]
    pub id: QuizId,
    #[serde(default)]
    pub course_id: Option<CourseId>,
    pub topic: String,
    #[serde(default)]
    pub percentage_score: Option<f64>,
}

impl QuizListItem {
    #[must_use]
    pub fn status(&self) -> QuizStatus {
        match self.percentage_score {
            Some(percentage) => QuizStatus::Completed { percentage },
            None => QuizStatus::NotTaken,
        }
    }
}
