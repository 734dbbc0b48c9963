//! PostgreSQL-backed `TodoRepository` implementation using Diesel ORM.
//!
//! Rows are validated on the way out; a record that no longer satisfies the
//! domain rules surfaces as a query error instead of leaking to callers.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_query;
use diesel_async::RunQueryDsl;
use tracing::info;

use crate::domain::ports::{TodoRepository, TodoRepositoryError};
use crate::domain::{Todo, TodoDraft, TodoId, TodoStatus, TodoTitle};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewTodoRow, TodoRow, TodoUpdate};
use super::pool::DbPool;
use super::schema::todos;

/// DDL applied at startup when the table is missing.
pub const CREATE_TODOS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS todos (
    id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    description TEXT,
    status VARCHAR(20) NOT NULL DEFAULT 'pending'
        CHECK (status IN ('pending', 'in_progress', 'completed')),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

const CREATE_TODOS_ORDER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS todos_created_at_id_idx ON todos (created_at DESC, id DESC)";

/// Diesel-backed implementation of the todo repository port.
#[derive(Clone)]
pub struct DieselTodoRepository {
    pool: DbPool,
}

impl DieselTodoRepository {
    /// Create a repository over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create the `todos` table and its ordering index if absent.
    ///
    /// Safe to call on every start.
    pub async fn ensure_schema(&self) -> Result<(), TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        for statement in [CREATE_TODOS_TABLE, CREATE_TODOS_ORDER_INDEX] {
            sql_query(statement)
                .execute(&mut conn)
                .await
                .map_err(map_diesel_error)?;
        }
        info!("todos table created or already exists");
        Ok(())
    }
}

/// Convert a database row into a validated domain todo.
fn row_to_todo(row: TodoRow) -> Result<Todo, TodoRepositoryError> {
    let TodoRow {
        id,
        title,
        description,
        status,
        created_at,
        updated_at,
    } = row;

    let invalid = |err: &dyn std::fmt::Display| {
        TodoRepositoryError::query(format!("invalid todo row {id}: {err}"))
    };
    let todo_id = TodoId::new(id).map_err(|err| invalid(&err))?;
    let title = TodoTitle::new(title).map_err(|err| invalid(&err))?;
    let status = status
        .parse::<TodoStatus>()
        .map_err(|err| invalid(&err))?;

    Ok(Todo::new(
        todo_id,
        TodoDraft::new(title, description, status),
        created_at,
        updated_at,
    ))
}

#[async_trait]
impl TodoRepository for DieselTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TodoRow> = todos::table
            .order((todos::created_at.desc(), todos::id.desc()))
            .select(TodoRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_todo).collect()
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = todos::table
            .filter(todos::id.eq(id.get()))
            .select(TodoRow::as_select())
            .first::<TodoRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_todo).transpose()
    }

    async fn insert(&self, draft: &TodoDraft) -> Result<TodoId, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewTodoRow {
            title: draft.title().as_str(),
            description: draft.description(),
            status: draft.status().as_str(),
        };

        let raw_id = diesel::insert_into(todos::table)
            .values(&new_row)
            .returning(todos::id)
            .get_result::<i32>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        TodoId::new(raw_id)
            .map_err(|err| TodoRepositoryError::query(format!("store returned id {raw_id}: {err}")))
    }

    async fn update(&self, id: TodoId, draft: &TodoDraft) -> Result<bool, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = TodoUpdate {
            title: draft.title().as_str(),
            description: draft.description(),
            status: draft.status().as_str(),
        };

        let affected = diesel::update(todos::table.filter(todos::id.eq(id.get())))
            .set((&changeset, todos::updated_at.eq(diesel::dsl::now)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }

    async fn delete(&self, id: TodoId) -> Result<bool, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(todos::table.filter(todos::id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}
