use thiserror::Error;

/// Number of questions requested when the form is left at its default.
pub const DEFAULT_QUIZ_QUESTION_COUNT: u32 = 5;
/// Number of flashcards requested when the form is left at its default.
pub const DEFAULT_FLASHCARD_COUNT: u32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("topic cannot be empty")]
    EmptyTopic,

    #[error("count must be > 0")]
    InvalidCount,
}

/// Parameters for generating a quiz or a flashcard set from an uploaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    topic: String,
    count: u32,
}

impl GenerationRequest {
    /// # Errors
    ///
    /// Returns `GenerationError` if the topic is blank or the count is zero.
    pub fn new(topic: impl Into<String>, count: u32) -> Result<Self, GenerationError> {
        let topic = topic.into();
        if topic.trim().is_empty() {
            return Err(GenerationError::EmptyTopic);
        }
        if count == 0 {
            return Err(GenerationError::InvalidCount);
        }
        Ok(Self { topic, count })
    }

    /// Parses the count from a form field.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::InvalidCount` if `count` is not a positive integer.
    pub fn parse(topic: impl Into<String>, count: &str) -> Result<Self, GenerationError> {
        let count = count
            .trim()
            .parse::<u32>()
            .map_err(|_| GenerationError::InvalidCount)?;
        Self::new(topic, count)
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }
}
