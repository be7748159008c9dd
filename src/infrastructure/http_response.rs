// HTTP response utilities for the JSON envelope
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// `{code, message, data, errors}`; absent `data` and `errors` serialize as `null`.
#[derive(Debug, Serialize)]
pub struct HttpResponse<T: Serialize> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
    pub errors: Option<String>,
}

impl<T: Serialize> HttpResponse<T> {
    pub fn new(
        status: StatusCode,
        message: impl Into<String>,
        data: Option<T>,
        errors: Option<String>,
    ) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            data,
            errors,
        }
    }
}

impl<T: Serialize> IntoResponse for HttpResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// 200 envelope carrying `data`
pub fn success<T: Serialize>(message: &str, data: T) -> HttpResponse<T> {
    HttpResponse::new(StatusCode::OK, message, Some(data), None)
}

/// 200 envelope with `data: null`
pub fn success_empty(message: &str) -> HttpResponse<()> {
    HttpResponse::new(StatusCode::OK, message, None, None)
}

/// Error envelope echoing `errors` back to the client
pub fn failure(status: StatusCode, message: &str, errors: String) -> HttpResponse<()> {
    HttpResponse::new(status, message, None, Some(errors))
}
