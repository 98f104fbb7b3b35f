use quiz_core::model::{CourseId, GenerationRequest, Quiz, QuizId, QuizListItem, QuizSection, Score};
use quiz_core::scoring::{AnswerSheet, score_answers};
use reqwest::Method;
use reqwest::header::{ACCEPT, HeaderValue};
use serde::Deserialize;
use tracing::info;

use crate::api::{ApiClient, MessageResponse};
use crate::error::ApiError;
use crate::upload::UploadFile;

#[derive(Debug, Deserialize)]
struct QuizListResponse {
    quizzes: Vec<QuizListItem>,
}

#[derive(Debug, Deserialize)]
struct QuizResponse {
    quiz: Quiz,
}

#[derive(Debug, Deserialize)]
struct GeneratedQuizResponse {
    quiz: Vec<QuizSection>,
}

#[derive(Debug, Deserialize)]
struct ScoreListResponse {
    scores: Vec<Score>,
}

/// Quiz generation, retrieval, attempts and scores.
#[derive(Clone)]
pub struct QuizService {
    api: ApiClient,
}

impl QuizService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns `ApiError::MissingAuth` when logged out, or
    /// `ApiError::RequestFailed` if the request fails.
    pub async fn list_for_course(&self, course_id: &CourseId) -> Result<Vec<QuizListItem>, ApiError> {
        let request = self
            .api
            .authorized(Method::GET, &["courses", course_id.as_str(), "quizzes", ""])
            .await?;
        let response: QuizListResponse = self.api.send(request).await?;
        Ok(response.quizzes)
    }

    /// # Errors
    ///
    /// Returns `ApiError::MissingAuth` when logged out, or
    /// `ApiError::RequestFailed` if the request fails.
    pub async fn get(&self, quiz_id: &QuizId) -> Result<Quiz, ApiError> {
        let request = self
            .api
            .authorized(Method::GET, &["quizzes", quiz_id.as_str()])
            .await?;
        let response: QuizResponse = self.api.send(request).await?;
        Ok(response.quiz)
    }

    /// Upload a document and have the backend generate a quiz from it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingAuth` when logged out, or
    /// `ApiError::RequestFailed` if generation fails.
    pub async fn generate(
        &self,
        course_id: &CourseId,
        request: &GenerationRequest,
        file: UploadFile,
    ) -> Result<Vec<QuizSection>, ApiError> {
        let file_name = file.file_name().to_owned();
        let count = request.count().to_string();
        let http = self
            .api
            .authorized(
                Method::POST,
                &["courses", course_id.as_str(), "generate-quiz", ""],
            )
            .await?
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .query(&[("topic", request.topic()), ("num_questions", count.as_str())])
            .multipart(file.into_form());
        let response: GeneratedQuizResponse = self.api.send(http).await?;
        info!(
            course = %course_id,
            topic = request.topic(),
            file = file_name.as_str(),
            sections = response.quiz.len(),
            "quiz generated"
        );
        Ok(response.quiz)
    }

    /// # Errors
    ///
    /// Returns `ApiError::MissingAuth` when logged out, or
    /// `ApiError::RequestFailed` if the request fails.
    pub async fn delete(&self, course_id: &CourseId, quiz_id: &QuizId) -> Result<(), ApiError> {
        let request = self
            .api
            .authorized(
                Method::DELETE,
                &["courses", course_id.as_str(), "quizzes", quiz_id.as_str(), ""],
            )
            .await?;
        let _: MessageResponse = self.api.send(request).await?;
        Ok(())
    }

    /// Grade an attempt locally and submit the raw score.
    ///
    /// Returns the submitted score.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingAuth` when logged out, or
    /// `ApiError::RequestFailed` if the submission fails.
    pub async fn submit_answers(
        &self,
        quiz_id: &QuizId,
        quiz: &Quiz,
        answers: &AnswerSheet,
    ) -> Result<u32, ApiError> {
        let score = score_answers(quiz.gradable_questions(), answers);
        self.submit_score(quiz_id, score).await?;
        Ok(score)
    }

    /// # Errors
    ///
    /// Returns `ApiError::MissingAuth` when logged out, or
    /// `ApiError::RequestFailed` if the request fails.
    pub async fn submit_score(&self, quiz_id: &QuizId, score: u32) -> Result<(), ApiError> {
        let request = self
            .api
            .authorized(Method::POST, &["quizzes", quiz_id.as_str(), "scores", ""])
            .await?
            .query(&[("score", score)]);
        let _: MessageResponse = self.api.send(request).await?;
        info!(quiz = %quiz_id, score, "score submitted");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ApiError::MissingAuth` when logged out, or
    /// `ApiError::RequestFailed` if the request fails.
    pub async fn list_scores(&self, quiz_id: &QuizId) -> Result<Vec<Score>, ApiError> {
        let request = self
            .api
            .authorized(Method::GET, &["quizzes", quiz_id.as_str(), "scores", ""])
            .await?;
        let response: ScoreListResponse = self.api.send(request).await?;
        Ok(response.scores)
    }
}
