//! Wire schema for the todo API.
//!
//! # Design
//! `Todo` is the stored record; `CreateTodo` and `UpdateTodo` are the request
//! payloads. `UpdateTodo` keeps every field optional so a PATCH body carries
//! only the fields the caller wants changed. Serde cannot distinguish an
//! explicit JSON `null` from an absent field for `Option<T>`, so both mean
//! "leave unchanged" on update.
//!
//! Title constraints live here as plain functions invoked by the handlers
//! before any store access, rather than as framework-level annotations, so
//! the validation contract is testable without going through HTTP.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// Maximum title length, counted in Unicode scalar values.
pub const TITLE_MAX_CHARS: usize = 200;

/// A single todo record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a new todo. A body without `title` fails
/// deserialization and is rejected by the JSON extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted (or `null`) fields remain unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl CreateTodo {
    /// Check the title constraint. Must pass before the store is invoked.
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_title(&self.title)
    }
}

impl UpdateTodo {
    /// Check the title constraint when a title is supplied. An update without
    /// a title has nothing to validate.
    pub fn validate(&self) -> Result<(), ApiError> {
        match &self.title {
            Some(title) => validate_title(title),
            None => Ok(()),
        }
    }
}

/// Reject empty titles and titles longer than [`TITLE_MAX_CHARS`].
pub fn validate_title(title: &str) -> Result<(), ApiError> {
    if title.is_empty() {
        return Err(ApiError::validation("title", "must not be empty"));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ApiError::validation(
            "title",
            format!("must be at most {TITLE_MAX_CHARS} characters"),
        ));
    }
    Ok(())
}
