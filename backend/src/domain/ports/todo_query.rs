//! Driving port for todo reads.

use async_trait::async_trait;

use crate::domain::{Error, Todo, TodoId};

/// Read-only access to todos.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoQuery: Send + Sync {
    /// Every todo, newest first.
    async fn list(&self) -> Result<Vec<Todo>, Error>;

    /// A single todo, or [`crate::domain::ErrorCode::NotFound`].
    async fn get(&self, id: TodoId) -> Result<Todo, Error>;
}
