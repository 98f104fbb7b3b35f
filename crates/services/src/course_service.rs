use quiz_core::model::{CourseDetails, CourseId, CourseName, CourseSummary};
use reqwest::Method;
use serde::Deserialize;

use crate::api::{ApiClient, MessageResponse};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
struct CreatedCourse {
    course_id: CourseId,
}

/// CRUD for the current user's courses.
#[derive(Clone)]
pub struct CourseService {
    api: ApiClient,
}

impl CourseService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns `ApiError::MissingAuth` when logged out, or
    /// `ApiError::RequestFailed` if the request fails.
    pub async fn list(&self) -> Result<Vec<CourseSummary>, ApiError> {
        let request = self.api.authorized(Method::GET, &["courses", ""]).await?;
        self.api.send(request).await
    }

    /// # Errors
    ///
    /// Returns `ApiError::MissingAuth` when logged out, or
    /// `ApiError::RequestFailed` if the request fails.
    pub async fn get(&self, course_id: &CourseId) -> Result<CourseDetails, ApiError> {
        let request = self
            .api
            .authorized(Method::GET, &["courses", course_id.as_str()])
            .await?;
        self.api.send(request).await
    }

    /// Create a course and return its id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingAuth` when logged out, or
    /// `ApiError::RequestFailed` (e.g. "Course already exists").
    pub async fn create(&self, name: &CourseName) -> Result<CourseId, ApiError> {
        let request = self
            .api
            .authorized(Method::POST, &["courses", ""])
            .await?
            .query(&[("course_name", name.as_str())]);
        let created: CreatedCourse = self.api.send(request).await?;
        Ok(created.course_id)
    }

    /// # Errors
    ///
    /// Returns `ApiError::MissingAuth` when logged out, or
    /// `ApiError::RequestFailed` if the request fails.
    pub async fn rename(&self, course_id: &CourseId, name: &CourseName) -> Result<(), ApiError> {
        let request = self
            .api
            .authorized(Method::PUT, &["courses", course_id.as_str()])
            .await?
            .query(&[("new_name", name.as_str())]);
        let _: MessageResponse = self.api.send(request).await?;
        Ok(())
    }

    /// Delete a course together with its quizzes.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingAuth` when logged out, or
    /// `ApiError::RequestFailed` if the request fails.
    pub async fn delete(&self, course_id: &CourseId) -> Result<(), ApiError> {
        let request = self
            .api
            .authorized(Method::DELETE, &["courses", course_id.as_str()])
            .await?;
        let _: MessageResponse = self.api.send(request).await?;
        Ok(())
    }
}
