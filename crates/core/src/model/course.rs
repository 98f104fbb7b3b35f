use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{CourseId, QuizId};
use crate::time::deserialize_backend_timestamp;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course name cannot be empty")]
    EmptyName,
}

/// Validated course name used for create and rename requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseName(String);

impl CourseName {
    /// # Errors
    ///
    /// Returns `CourseError::EmptyName` if the trimmed name is empty.
    pub fn new(raw: impl Into<String>) -> Result<Self, CourseError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CourseError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Course as listed by `GET /courses/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    #[serde(rename = "_id")]
    pub id: CourseId,
    pub name: String,
}

/// Quiz reference embedded in course details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseQuizRef {
    #[serde(rename = "_id")]
    pub id: QuizId,
    pub topic: String,
}

/// Course with aggregate quiz statistics, as returned by `GET /courses/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CourseDetails {
    #[serde(rename = "_id")]
    pub id: CourseId,
    pub name: String,
    #[serde(deserialize_with = "deserialize_backend_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub quizzes: Vec<CourseQuizRef>,
    pub number_of_quizzes: u32,
    pub average_score: f64,
}
