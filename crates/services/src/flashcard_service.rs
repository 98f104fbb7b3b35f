use quiz_core::model::{CourseId, Flashcard, FlashcardTopic, GenerationRequest};
use reqwest::Method;
use reqwest::header::{ACCEPT, HeaderValue};
use serde::Deserialize;
use tracing::info;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::upload::UploadFile;

#[derive(Debug, Deserialize)]
struct TopicsResponse {
    topics: Vec<FlashcardTopic>,
}

#[derive(Debug, Deserialize)]
struct FlashcardsResponse {
    flashcards: Vec<Flashcard>,
}

/// Flashcard topics, per-topic cards and generation.
#[derive(Clone)]
pub struct FlashcardService {
    api: ApiClient,
}

impl FlashcardService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns `ApiError::MissingAuth` when logged out, or
    /// `ApiError::RequestFailed` if the request fails.
    pub async fn list_topics(&self, course_id: &CourseId) -> Result<Vec<FlashcardTopic>, ApiError> {
        let request = self
            .api
            .authorized(
                Method::GET,
                &["courses", course_id.as_str(), "flashcards", "topics", ""],
            )
            .await?;
        let response: TopicsResponse = self.api.send(request).await?;
        Ok(response.topics)
    }

    /// # Errors
    ///
    /// Returns `ApiError::MissingAuth` when logged out, or
    /// `ApiError::RequestFailed` if the request fails.
    pub async fn list_by_topic(
        &self,
        course_id: &CourseId,
        topic: &FlashcardTopic,
    ) -> Result<Vec<Flashcard>, ApiError> {
        let request = self
            .api
            .authorized(
                Method::GET,
                &["courses", course_id.as_str(), "flashcards", topic.as_str(), ""],
            )
            .await?;
        let response: FlashcardsResponse = self.api.send(request).await?;
        Ok(response.flashcards)
    }

    /// Upload a document and have the backend generate flashcards from it.
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
    ) -> Result<Vec<Flashcard>, ApiError> {
        let count = request.count().to_string();
        let http = self
            .api
            .authorized(
                Method::POST,
                &["courses", course_id.as_str(), "generate-flashcards", ""],
            )
            .await?
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .query(&[("topic", request.topic()), ("num_flashcards", count.as_str())])
            .multipart(file.into_form());
        let response: FlashcardsResponse = self.api.send(http).await?;
        info!(
            course = %course_id,
            topic = request.topic(),
            cards = response.flashcards.len(),
            "flashcards generated"
        );
        Ok(response.flashcards)
    }
}
