//! Driving port for todo mutations.

use async_trait::async_trait;

use crate::domain::{Error, Todo, TodoDraft, TodoId};

/// Create, replace and delete todos.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoCommand: Send + Sync {
    /// Store a new todo and return it as persisted.
    async fn create(&self, draft: &TodoDraft) -> Result<Todo, Error>;

    /// Replace the mutable fields of an existing todo.
    async fn update(&self, id: TodoId, draft: &TodoDraft) -> Result<Todo, Error>;

    /// Delete a todo, echoing the removed id.
    async fn delete(&self, id: TodoId) -> Result<TodoId, Error>;
}
