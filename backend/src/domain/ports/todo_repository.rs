//! Driven port for todo persistence.

use async_trait::async_trait;

use crate::domain::{Todo, TodoDraft, TodoId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by todo repository adapters.
    pub enum TodoRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "todo repository connection failed: {message}",
        /// A query or mutation failed, or returned malformed data.
        Query { message: String } =>
            "todo repository query failed: {message}",
    }
}

/// Storage operations over the `todos` collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos, newest first (ties broken by descending id).
    async fn list(&self) -> Result<Vec<Todo>, TodoRepositoryError>;

    /// Look up a single todo.
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoRepositoryError>;

    /// Insert a new record and return its assigned id.
    async fn insert(&self, draft: &TodoDraft) -> Result<TodoId, TodoRepositoryError>;

    /// Overwrite title, description and status, refreshing `updated_at`.
    ///
    /// Returns `false` when no row matched `id`.
    async fn update(&self, id: TodoId, draft: &TodoDraft) -> Result<bool, TodoRepositoryError>;

    /// Remove a record. Returns `false` when no row matched `id`.
    async fn delete(&self, id: TodoId) -> Result<bool, TodoRepositoryError>;
}
