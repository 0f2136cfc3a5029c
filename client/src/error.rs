//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `Validation` get dedicated variants because they are the
//! two failure kinds the service defines; callers frequently branch on them.
//! All other non-2xx responses land in `Http` with the raw status code and
//! body for debugging.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 422 — an input field failed validation. `detail`
    /// carries the server's description of the offending field.
    #[error("validation failed: {detail}")]
    Validation { detail: String },

    /// The server returned a non-2xx status other than 404 or 422.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
