//! Request handlers: translate HTTP requests into store operations.
//!
//! Each mutating handler validates first, then takes the write lock and
//! calls exactly one store operation. For PATCH, an unknown id short-circuits
//! to 404 before any supplied field is checked or applied, so a nonexistent
//! id yields 404 regardless of body content.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::store::SharedStore;
use crate::types::{CreateTodo, Todo, UpdateTodo};

pub async fn create_todo(
    State(store): State<SharedStore>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    input.validate()?;
    let todo = store.write().await.create(input);
    tracing::debug!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    Json(store.read().await.list())
}

pub async fn update_todo(
    State(store): State<SharedStore>,
    id: Result<Path<Uuid>, PathRejection>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    let id = valid_id(id)?;
    let mut store = store.write().await;
    if !store.contains(id) {
        return Err(ApiError::NotFound);
    }
    input.validate()?;
    let todo = store.update(id, input)?;
    tracing::debug!(id = %todo.id, "updated todo");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = valid_id(id)?;
    store.write().await.delete(id)?;
    tracing::debug!(%id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// A malformed `{id}` segment is a constraint failure on input, so it lands
/// in the 422 bucket rather than axum's default 400.
fn valid_id(id: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::validation("id", "must be a valid UUID"))?;
    Ok(id)
}
