use std::sync::Arc;

use quiz_core::model::AuthToken;
use storage::repository::{SessionRepository, StorageError};
use tracing::info;

/// Process-wide holder of the bearer token.
///
/// The token is set at login and read before every authenticated request.
/// It never expires client-side.
#[derive(Clone)]
pub struct SessionService {
    repo: Arc<dyn SessionRepository>,
}

impl SessionService {
    #[must_use]
    pub fn new(repo: Arc<dyn SessionRepository>) -> Self {
        Self { repo }
    }

    /// Current token, or `None` when not logged in.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the session store cannot be read.
    pub async fn token(&self) -> Result<Option<AuthToken>, StorageError> {
        self.repo.load_token().await
    }

    /// Replace the stored token.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the token cannot be persisted.
    pub async fn set_token(&self, token: &AuthToken) -> Result<(), StorageError> {
        self.repo.save_token(token).await?;
        info!("session token stored");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the session store cannot be read.
    pub async fn is_logged_in(&self) -> Result<bool, StorageError> {
        Ok(self.token().await?.is_some())
    }
}
