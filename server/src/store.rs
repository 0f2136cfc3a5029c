//! In-memory todo store.
//!
//! # Design
//! `TodoStore` owns all mutation logic and nothing else; handlers validate
//! first and then call exactly one store operation. Records live in an
//! `IndexMap` keyed by id so `list` returns insertion order. The store is an
//! explicitly constructed value (fresh one per `app()` call, so tests get
//! clean isolation) shared behind `Arc<RwLock<_>>` — a single lock guards
//! all four operations, so no two mutations interleave.
//!
//! State is process-local by design: nothing survives a restart.

use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ApiError;
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// Handle shared between the router and its handlers.
pub type SharedStore = Arc<RwLock<TodoStore>>;

/// The in-memory collection of todo records.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: IndexMap<Uuid, Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record with a fresh id, `completed = false`, and the
    /// current time as `created_at`. Input is assumed validated.
    pub fn create(&mut self, input: CreateTodo) -> Todo {
        let todo = Todo {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            completed: false,
            created_at: Utc::now(),
        };
        self.todos.insert(todo.id, todo.clone());
        todo
    }

    /// All current records, first created first.
    pub fn list(&self) -> Vec<Todo> {
        self.todos.values().cloned().collect()
    }

    /// Overwrite exactly the fields present in `input`; absent fields keep
    /// their stored values. Title emptiness is the validation layer's
    /// problem, not re-checked here.
    pub fn update(&mut self, id: Uuid, input: UpdateTodo) -> Result<Todo, ApiError> {
        let todo = self.todos.get_mut(&id).ok_or(ApiError::NotFound)?;
        if let Some(title) = input.title {
            todo.title = title;
        }
        if let Some(description) = input.description {
            todo.description = Some(description);
        }
        if let Some(completed) = input.completed {
            todo.completed = completed;
        }
        Ok(todo.clone())
    }

    /// Remove the record if present, keeping the order of the rest.
    pub fn delete(&mut self, id: Uuid) -> Result<(), ApiError> {
        self.todos
            .shift_remove(&id)
            .map(|_| ())
            .ok_or(ApiError::NotFound)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.todos.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(title: &str) -> CreateTodo {
        CreateTodo {
            title: title.to_string(),
            description: None,
        }
    }

    #[test]
    fn create_assigns_defaults() {
        let mut store = TodoStore::new();
        let todo = store.create(create_input("Buy milk"));
        assert_eq!(todo.title, "Buy milk");
        assert!(todo.description.is_none());
        assert!(!todo.completed);
        assert!(store.contains(todo.id));
    }

    #[test]
    fn create_assigns_unique_ids() {
        let mut store = TodoStore::new();
        let a = store.create(create_input("a"));
        let b = store.create(create_input("b"));
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn list_empty_store() {
        let store = TodoStore::new();
        assert!(store.list().is_empty());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = TodoStore::new();
        let ids: Vec<Uuid> = ["first", "second", "third"]
            .iter()
            .map(|t| store.create(create_input(t)).id)
            .collect();
        let listed: Vec<Uuid> = store.list().into_iter().map(|t| t.id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn update_applies_only_present_fields() {
        let mut store = TodoStore::new();
        let created = store.create(CreateTodo {
            title: "Original".to_string(),
            description: Some("keep me".to_string()),
        });

        let updated = store
            .update(
                created.id,
                UpdateTodo {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(updated.completed);
        assert_eq!(updated.title, "Original");
        assert_eq!(updated.description.as_deref(), Some("keep me"));
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn update_replaces_description() {
        let mut store = TodoStore::new();
        let created = store.create(create_input("Task"));
        let updated = store
            .update(
                created.id,
                UpdateTodo {
                    description: Some("now set".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.description.as_deref(), Some("now set"));
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let mut store = TodoStore::new();
        let err = store.update(Uuid::new_v4(), UpdateTodo::default()).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut store = TodoStore::new();
        let a = store.create(create_input("a"));
        let b = store.create(create_input("b"));

        store.delete(a.id).unwrap();

        assert_eq!(store.len(), 1);
        assert!(!store.contains(a.id));
        assert!(store.contains(b.id));
    }

    #[test]
    fn delete_missing_id_is_not_found() {
        let mut store = TodoStore::new();
        store.create(create_input("survivor"));
        let err = store.delete(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
        assert_eq!(store.len(), 1);
    }
}
