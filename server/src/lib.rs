//! In-memory todo HTTP service.
//!
//! # Overview
//! Maps the five API routes onto a single in-memory [`TodoStore`]: create,
//! list, partial-update, delete, plus a health probe. State lives only in
//! process memory and is lost on restart — that is a design property, not a
//! gap.
//!
//! # Design
//! - `app()` builds a router around a fresh store, so every test (and every
//!   process) starts from an empty collection.
//! - Handlers validate before touching the store; the 422/404 distinction is
//!   fixed: malformed input is 422, a missing id is 404.
//! - One `RwLock` guards the whole collection, so a request's
//!   validate-then-mutate sequence never interleaves with another mutation.

pub mod error;
pub mod handlers;
pub mod store;
pub mod types;

pub use error::ApiError;
pub use store::{SharedStore, TodoStore};
pub use types::{CreateTodo, Todo, UpdateTodo};

use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};
use tokio::{net::TcpListener, sync::RwLock};

/// Build the router with a fresh, empty store.
pub fn app() -> Router {
    let store: SharedStore = Arc::new(RwLock::new(TodoStore::new()));
    Router::new()
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/{id}",
            patch(handlers::update_todo).delete(handlers::delete_todo),
        )
        .route("/health", get(handlers::health))
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
