use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::routes::error_chain_fmt;
use crate::validation::ValidationError;

/// Body of every error response the API sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// `message` is all the client gets to see; `source` only goes to the logs.
    #[error("{message}")]
    UnexpectedError {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    /// For use with `map_err`: wraps any failure under a fixed client-facing message.
    pub fn unexpected<E>(message: &'static str) -> impl FnOnce(E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        move |error| Self::UnexpectedError {
            message,
            source: error.into(),
        }
    }
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::ValidationError(error) => {
                tracing::info!(error = %error, "Rejected invalid input");
                StatusCode::BAD_REQUEST
            }
            Self::UnexpectedError { .. } => {
                tracing::error!(error.cause_chain = ?self, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

/// Unknown paths under `/api` get a JSON 404 instead of the site markup.
pub async fn api_not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not found")))
}

/// Known `/api` path, unsupported verb.
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody::new("Method not allowed")),
    )
}
