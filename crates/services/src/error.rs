//! Shared error types for the services crate.

use reqwest::StatusCode;
use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by API-backed services.
///
/// There are two kinds: the session holds no token (detected locally,
/// nothing is sent), or the request did not produce the expected payload.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("not logged in")]
    MissingAuth,
    #[error(transparent)]
    RequestFailed(#[from] RequestFailure),
}

impl ApiError {
    #[must_use]
    pub fn is_missing_auth(&self) -> bool {
        matches!(self, Self::MissingAuth)
    }

    /// Human-readable message supplied by the backend, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::RequestFailed(RequestFailure::Status {
                detail: Some(detail),
                ..
            })
            | Self::RequestFailed(RequestFailure::Backend(detail)) => Some(detail.as_str()),
            _ => None,
        }
    }

    /// HTTP status of a rejected request, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::RequestFailed(RequestFailure::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

/// Why a request failed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RequestFailure {
    #[error("request failed with status {status}")]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("backend reported an error: {0}")]
    Backend(String),
    #[error("invalid endpoint: {0}")]
    Endpoint(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Session(#[from] StorageError),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed(RequestFailure::Http(err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::RequestFailed(RequestFailure::Decode(err))
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        Self::RequestFailed(RequestFailure::Session(err))
    }
}

/// Errors emitted while resolving the API configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid API URL {raw:?}: {source}")]
    InvalidUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}

/// Errors emitted while reading a file selected for upload.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UploadError {
    #[error("no file selected")]
    Missing,
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
