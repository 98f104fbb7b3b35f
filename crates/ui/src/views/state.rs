use dioxus::prelude::*;
use services::ApiError;

/// Message shown whenever a page needs a session and none is stored.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please login first.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    LoginRequired,
    Failed(String),
}

impl ViewError {
    /// Maps a failed load. Loads always show the page's own message.
    #[must_use]
    pub fn from_load(err: &ApiError, fallback: &str) -> Self {
        if err.is_missing_auth() {
            Self::LoginRequired
        } else {
            Self::Failed(fallback.to_owned())
        }
    }

    /// Maps a failed mutation, preferring the backend's own message.
    #[must_use]
    pub fn from_api(err: &ApiError, fallback: &str) -> Self {
        if err.is_missing_auth() {
            Self::LoginRequired
        } else {
            Self::Failed(err.detail().unwrap_or(fallback).to_owned())
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::LoginRequired => LOGIN_REQUIRED_MESSAGE,
            Self::Failed(message) => message,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Loading,
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

/// Progress of a form submission or other one-shot mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Failed(ViewError),
}

impl SubmitState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(err) => Some(err.message()),
            Self::Idle | Self::Submitting => None,
        }
    }
}
