//! Typed request helper shared by every API-backed service.

use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::error::{ApiError, RequestFailure};
use crate::session_service::SessionService;

/// Acknowledgement body returned by mutation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub msg: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    session: SessionService,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig, session: SessionService) -> Self {
        Self {
            http: Client::new(),
            config,
            session,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &SessionService {
        &self.session
    }

    /// Builds `<base_url>/<segments>`, percent-encoding each segment.
    ///
    /// A trailing empty segment yields a trailing slash.
    ///
    /// # Errors
    ///
    /// Returns `RequestFailure::Endpoint` if the base URL cannot take path segments.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.config.base_url().clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                RequestFailure::Endpoint(self.config.base_url().to_string())
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    /// Starts a request that does not need a session.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the endpoint cannot be built.
    pub fn anonymous(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(segments)?;
        debug!(%method, path = url.path(), "api request");
        Ok(self.http.request(method, url))
    }

    /// Starts a request carrying `Authorization: Bearer <token>`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingAuth` without touching the network when no
    /// token is stored.
    pub async fn authorized(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder, ApiError> {
        let Some(token) = self.session.token().await? else {
            debug!(%method, "no session token; request skipped");
            return Err(ApiError::MissingAuth);
        };
        Ok(self.anonymous(method, segments)?.bearer_auth(token.as_str()))
    }

    /// Sends the request and decodes a successful JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RequestFailed` on transport failure, a non-success
    /// status, a success body of the form `{"error": ...}`, or a body that
    /// does not decode into `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await.inspect_err(|err| {
            warn!(error = %err, "api request could not be sent");
        })?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = error_detail(&body);
            warn!(%status, detail = detail.as_deref().unwrap_or(""), "api request rejected");
            return Err(RequestFailure::Status { status, detail }.into());
        }

        let value: Value = serde_json::from_slice(&body)?;
        if let Some(message) = reported_error(&value) {
            warn!(%status, detail = message.as_str(), "api reported an error");
            return Err(RequestFailure::Backend(message).into());
        }

        Ok(serde_json::from_value(value)?)
    }
}

/// Extracts a human-readable message from an error body.
///
/// Looks at `detail` first (a string, or a validation list whose first entry
/// carries `msg`), then at `error`.
fn error_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail") {
        Some(Value::String(detail)) => return Some(detail.clone()),
        Some(Value::Array(items)) => {
            if let Some(msg) = items
                .first()
                .and_then(|item| item.get("msg"))
                .and_then(Value::as_str)
            {
                return Some(msg.to_owned());
            }
        }
        _ => {}
    }
    value
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// The backend answers some failures with a success status and `{"error": ...}`.
fn reported_error(value: &Value) -> Option<String> {
    value
        .as_object()
        .and_then(|object| object.get("error"))
        .map(|error| match error {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        })
}
