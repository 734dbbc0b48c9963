//! Todo domain service.
//!
//! Implements both driving ports on top of a [`TodoRepository`]. Writes are
//! followed by a read so callers always receive the record as stored,
//! including store-assigned timestamps.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::domain::ports::{TodoCommand, TodoQuery, TodoRepository, TodoRepositoryError};
use crate::domain::{Error, Todo, TodoDraft, TodoId};

fn map_repository_error(operation: &'static str, err: TodoRepositoryError) -> Error {
    error!(operation, error = %err, "todo repository failure");
    Error::internal(format!("failed to {operation}"))
}

fn not_found(id: TodoId) -> Error {
    Error::not_found(format!("todo {id} not found"))
}

/// Service backing the todo command and query ports.
#[derive(Clone)]
pub struct TodoService<R> {
    repo: Arc<R>,
}

impl<R> TodoService<R> {
    /// Create a service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R> TodoService<R>
where
    R: TodoRepository,
{
    /// Read back a record that a write just touched.
    ///
    /// A missing row at this point means the store lost the write, which is
    /// reported as an internal error rather than a 404.
    async fn read_back(&self, id: TodoId, operation: &'static str) -> Result<Todo, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|err| map_repository_error(operation, err))?
            .ok_or_else(|| {
                warn!(%id, operation, "todo vanished after write");
                Error::internal(format!("failed to {operation}"))
            })
    }
}

#[async_trait]
impl<R> TodoCommand for TodoService<R>
where
    R: TodoRepository,
{
    async fn create(&self, draft: &TodoDraft) -> Result<Todo, Error> {
        let id = self
            .repo
            .insert(draft)
            .await
            .map_err(|err| map_repository_error("create todo", err))?;
        self.read_back(id, "create todo").await
    }

    async fn update(&self, id: TodoId, draft: &TodoDraft) -> Result<Todo, Error> {
        let matched = self
            .repo
            .update(id, draft)
            .await
            .map_err(|err| map_repository_error("update todo", err))?;
        if !matched {
            return Err(not_found(id));
        }
        self.read_back(id, "update todo").await
    }

    async fn delete(&self, id: TodoId) -> Result<TodoId, Error> {
        let removed = self
            .repo
            .delete(id)
            .await
            .map_err(|err| map_repository_error("delete todo", err))?;
        if removed { Ok(id) } else { Err(not_found(id)) }
    }
}

#[async_trait]
impl<R> TodoQuery for TodoService<R>
where
    R: TodoRepository,
{
    async fn list(&self) -> Result<Vec<Todo>, Error> {
        self.repo
            .list()
            .await
            .map_err(|err| map_repository_error("fetch todos", err))
    }

    async fn get(&self, id: TodoId) -> Result<Todo, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|err| map_repository_error("fetch todo", err))?
            .ok_or_else(|| not_found(id))
    }
}

#[cfg(test)]
#[path = "todo_service_tests.rs"]
mod tests;
