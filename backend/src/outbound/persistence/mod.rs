//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Provides the concrete [`crate::domain::ports::TodoRepository`] backed by
//! PostgreSQL through `diesel-async` with `bb8` pooling.
//!
//! Row structs (`models.rs`) and the table definition (`schema.rs`) stay
//! private to this module; repositories only translate between them and
//! domain types.
//!
//! # Example
//!
//! ```ignore
//! use todo_backend::outbound::persistence::{DbPool, DieselTodoRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/todo_db")).await?;
//! let repo = DieselTodoRepository::new(pool);
//! repo.ensure_schema().await?;
//! ```

mod diesel_basic_error_mapping;
mod diesel_todo_repository;
mod models;
mod pool;
mod schema;

pub use diesel_todo_repository::{CREATE_TODOS_TABLE, DieselTodoRepository};
pub use pool::{DbPool, PoolConfig, PoolError};
