//! Mapping from domain errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use lw_domain::Error;

/// Error returned by API handlers. Renders as `{ "message": "<text>" }`.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            Error::WorkNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(error = %self.0, %status, "request rejected");
        let body = json!({ "message": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}
