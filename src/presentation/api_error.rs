// API errors and their HTTP mapping
use crate::domain::error::ScaleError;
use crate::infrastructure::http_response::failure;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt::Display;
use thiserror::Error;

/// Handler failure; `message` is the envelope's headline for the operation.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}: {source}")]
    Scale {
        message: &'static str,
        #[source]
        source: ScaleError,
    },

    /// Body or query string could not be extracted
    #[error("{message}: {detail}")]
    BadRequest { message: &'static str, detail: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn scale(message: &'static str) -> impl FnOnce(ScaleError) -> ApiError {
        move |source| ApiError::Scale { message, source }
    }

    pub fn rejected<E: Display>(message: &'static str) -> impl FnOnce(E) -> ApiError {
        move |rejection| ApiError::BadRequest {
            message,
            detail: rejection.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Scale { source, .. } if source.is_invalid_input() => StatusCode::BAD_REQUEST,
            // Any domain error outside the invalid-input kind is a server fault
            ApiError::Scale { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, detail) = match self {
            ApiError::Scale { message, source } => (message, source.to_string()),
            ApiError::BadRequest { message, detail } => (message, detail),
        };

        if status.is_server_error() {
            tracing::error!("{}: {}", message, detail);
        } else {
            tracing::warn!("{}: {}", message, detail);
        }

        failure(status, message, detail).into_response()
    }
}
