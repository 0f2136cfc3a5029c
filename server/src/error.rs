//! Error taxonomy for the todo API.
//!
//! # Design
//! Exactly two failure kinds exist: a request that fails validation (422,
//! never reaches the store) and a request that targets a missing id (404).
//! Both render as `{"detail": "..."}` via `IntoResponse`. Anything else is
//! left to axum's extractor rejections and generic 500 handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures a handler can report.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request targets an id that is not in the store.
    #[error("todo not found")]
    NotFound,

    /// An input field failed a structural or constraint check. No mutation
    /// has occurred.
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}

impl ApiError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field,
            message: message.into(),
        }
    }
}

/// JSON error body, matching the `{"detail": ...}` shape clients expect.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Todo not found".to_string()),
            ApiError::Validation { .. } => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
