use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::error::Error as StdError;
use thiserror::Error;

use super::ErrorBody;
use crate::catalog::CatalogError;
use crate::constants::messages::{EPISODE_NOT_FOUND, INTERNAL_ERROR};

/// Error returned by the JSON endpoints.
///
/// The message of an internal error is logged, never sent to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn episode_not_found() -> Self {
        Self::NotFound(EPISODE_NOT_FOUND.to_string())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::NotFound(msg) | Self::BadRequest(msg) => ErrorBody::new(msg),
            Self::Internal(detail) => {
                tracing::error!(event = "api_request_failed", error = %detail, "API request failed");
                ErrorBody::new(INTERNAL_ERROR)
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self::Internal(error_chain(&err))
    }
}

/// Error returned by the HTML endpoints.
///
/// Validation failures keep the JSON body of [`ApiError`]; a missing episode
/// and internal failures answer in plain text.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Episode not found")]
    EpisodeNotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::Api(err) => err.into_response(),
            Self::EpisodeNotFound => (StatusCode::NOT_FOUND, EPISODE_NOT_FOUND).into_response(),
            Self::Internal(detail) => {
                tracing::error!(event = "page_request_failed", error = %detail, "Page request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR).into_response()
            }
        }
    }
}

impl From<CatalogError> for PageError {
    fn from(err: CatalogError) -> Self {
        Self::Internal(error_chain(&err))
    }
}

/// `"outer: inner: root"` rendering of an error and its sources.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
