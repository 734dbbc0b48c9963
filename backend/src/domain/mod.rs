//! Domain primitives, ports and services.
//!
//! Purpose: define the todo entity with its validation rules, the ports that
//! adapters plug into, and the service that implements the driving ports.
//! Nothing in here depends on Actix or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Todo, TodoDraft, TodoId, TodoStatus, TodoTitle: the todo model.
//! - TodoService: implements `ports::TodoCommand` and `ports::TodoQuery`.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod todo;
pub mod todo_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::todo::{
    InvalidTodoId, TODO_TITLE_MAX, Todo, TodoDraft, TodoId, TodoStatus, TodoTitle,
    TodoValidationError,
};
pub use self::todo_service::TodoService;
pub use self::trace_id::TraceId;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use todo_backend::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("todo 1 not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
