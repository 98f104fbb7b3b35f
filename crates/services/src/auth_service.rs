use quiz_core::model::{AuthToken, Credentials};
use reqwest::Method;
use serde::Deserialize;
use tracing::info;

use crate::api::{ApiClient, MessageResponse};
use crate::error::{ApiError, RequestFailure};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Login and registration against the backend.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchange credentials for a token and store it in the session.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RequestFailed` when the backend rejects the
    /// credentials (carrying its `detail`), or when the token cannot be stored.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let request = self
            .api
            .anonymous(Method::POST, &["token"])?
            .form(&[
                ("username", credentials.username()),
                ("password", credentials.password()),
            ]);
        let response: TokenResponse = self.api.send(request).await?;
        let token = AuthToken::new(response.access_token).ok_or_else(|| {
            RequestFailure::Backend("login response did not include a token".to_owned())
        })?;
        self.api.session().set_token(&token).await?;
        info!(username = credentials.username(), "logged in");
        Ok(())
    }

    /// Create an account. Does not log in.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RequestFailed` when the backend rejects the request.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let request = self
            .api
            .anonymous(Method::POST, &["register", ""])?
            .query(credentials);
        let _: MessageResponse = self.api.send(request).await?;
        info!(username = credentials.username(), "registered");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ApiError::RequestFailed` if the session store cannot be read.
    pub async fn is_logged_in(&self) -> Result<bool, ApiError> {
        Ok(self.api.session().is_logged_in().await?)
    }
}
