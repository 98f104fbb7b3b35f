use quiz_core::model::{DEFAULT_FLASHCARD_COUNT, DEFAULT_QUIZ_QUESTION_COUNT, GenerationRequest};

use crate::views::ViewError;

pub const MISSING_FILE_MESSAGE: &str = "Please upload a file.";

/// What a generation form produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationKind {
    Quiz,
    Flashcards,
}

impl GenerationKind {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Quiz => "Generate Quiz",
            Self::Flashcards => "Generate Flashcards",
        }
    }

    #[must_use]
    pub fn topic_placeholder(self) -> &'static str {
        match self {
            Self::Quiz => "Quiz Topic",
            Self::Flashcards => "Flashcard Topic",
        }
    }

    #[must_use]
    pub fn count_placeholder(self) -> &'static str {
        match self {
            Self::Quiz => "Number of Questions",
            Self::Flashcards => "Number of Flashcards",
        }
    }

    #[must_use]
    pub fn default_count(self) -> u32 {
        match self {
            Self::Quiz => DEFAULT_QUIZ_QUESTION_COUNT,
            Self::Flashcards => DEFAULT_FLASHCARD_COUNT,
        }
    }

    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Quiz => "Error generating quiz.",
            Self::Flashcards => "Error generating flashcards.",
        }
    }
}

/// Raw form input, validated on submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationForm {
    pub file_path: String,
    pub topic: String,
    pub count: String,
}

impl GenerationForm {
    #[must_use]
    pub fn new(kind: GenerationKind) -> Self {
        Self {
            file_path: String::new(),
            topic: String::new(),
            count: kind.default_count().to_string(),
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::Failed` when no file is chosen or the topic or
    /// count is invalid.
    pub fn validate(&self) -> Result<GenerationRequest, ViewError> {
        if self.file_path.trim().is_empty() {
            return Err(ViewError::Failed(MISSING_FILE_MESSAGE.to_string()));
        }
        GenerationRequest::parse(self.topic.trim(), &self.count)
            .map_err(|err| ViewError::Failed(err.to_string()))
    }
}
