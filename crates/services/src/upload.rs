use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::error::UploadError;

/// A document selected for quiz or flashcard generation.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    file_name: String,
    bytes: Vec<u8>,
}

impl UploadFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Reads the file at `path`. A blank path means nothing was selected.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Missing` for a blank path and `UploadError::Io`
    /// when the file cannot be read.
    pub async fn from_path(path: &str) -> Result<Self, UploadError> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(UploadError::Missing);
        }
        let bytes = tokio::fs::read(trimmed)
            .await
            .map_err(|source| UploadError::Io {
                path: trimmed.to_owned(),
                source,
            })?;
        let file_name = Path::new(trimmed)
            .file_name()
            .map_or_else(|| trimmed.to_owned(), |name| name.to_string_lossy().into_owned());
        Ok(Self::new(file_name, bytes))
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Multipart body with the document in a single `file` part.
    #[must_use]
    pub fn into_form(self) -> Form {
        let part = Part::bytes(self.bytes).file_name(self.file_name);
        Form::new().part("file", part)
    }
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}
