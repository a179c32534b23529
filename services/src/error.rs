use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::database::StorageError;

/// Errors a handler turns into an HTTP response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to fetch MPS data")]
    MpsFetch(#[source] StorageError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MpsFetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let source = std::error::Error::source(&self)
            .map(ToString::to_string)
            .unwrap_or_default();
        tracing::error!(error = %self, cause = %source, "Request failed");

        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
