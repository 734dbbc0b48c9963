//! Todo HTTP handlers.
//!
//! ```text
//! GET    /api/todos
//! GET    /api/todos/{id}
//! POST   /api/todos
//! PUT    /api/todos/{id}
//! DELETE /api/todos/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::Todo;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::json_config;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_todo_draft, parse_todo_id};

/// Confirmation text returned by a successful delete.
pub const DELETE_CONFIRMATION: &str = "Todo deleted successfully";

/// Body accepted by create and update.
///
/// Every field is optional at the wire level so that a missing title is
/// reported as a validation error rather than a decoding failure.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct TodoRequestBody {
    #[schema(example = "Buy milk", max_length = 255)]
    pub title: Option<String>,
    #[schema(example = "Two litres, semi-skimmed")]
    pub description: Option<String>,
    #[schema(example = "pending", pattern = "^(pending|in_progress|completed)$")]
    pub status: Option<String>,
}

/// Todo as returned by every read and write endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = Todo)]
pub struct TodoResponseBody {
    #[schema(example = 1)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    #[schema(example = "in_progress")]
    pub status: String,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
}

impl From<&Todo> for TodoResponseBody {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id().get(),
            title: todo.title().as_str().to_owned(),
            description: todo.description().map(str::to_owned),
            status: todo.status().as_str().to_owned(),
            created_at: todo.created_at().to_rfc3339(),
            updated_at: todo.updated_at().to_rfc3339(),
        }
    }
}

impl From<Todo> for TodoResponseBody {
    fn from(todo: Todo) -> Self {
        Self::from(&todo)
    }
}

/// Body returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteTodoResponseBody {
    #[schema(example = "Todo deleted successfully")]
    pub message: String,
    #[schema(example = 1)]
    pub id: i32,
}

/// List all todos, newest first.
#[utoipa::path(
    get,
    path = "/api/todos",
    responses(
        (status = 200, description = "All todos", body = [TodoResponseBody]),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "listTodos"
)]
#[get("/todos")]
pub async fn list_todos(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TodoResponseBody>>> {
    let todos = state.todos_query.list().await?;
    Ok(web::Json(todos.iter().map(TodoResponseBody::from).collect()))
}

/// Fetch one todo by id.
#[utoipa::path(
    get,
    path = "/api/todos/{id}",
    params(("id" = i32, Path, description = "Todo identifier")),
    responses(
        (status = 200, description = "The todo", body = TodoResponseBody),
        (status = 404, description = "No such todo", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "getTodo"
)]
#[get("/todos/{id}")]
pub async fn get_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TodoResponseBody>> {
    let id = parse_todo_id(&path)?;
    let todo = state.todos_query.get(id).await?;
    Ok(web::Json(todo.into()))
}

/// Create a todo. Status defaults to `pending`.
#[utoipa::path(
    post,
    path = "/api/todos",
    request_body = TodoRequestBody,
    responses(
        (status = 201, description = "Todo created", body = TodoResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "createTodo"
)]
#[post("/todos")]
pub async fn create_todo(
    state: web::Data<HttpState>,
    payload: web::Json<TodoRequestBody>,
) -> ApiResult<HttpResponse> {
    let TodoRequestBody {
        title,
        description,
        status,
    } = payload.into_inner();
    let draft = parse_todo_draft(title, description, status)?;
    let todo = state.todos.create(&draft).await?;
    info!(id = %todo.id(), "todo created");
    Ok(HttpResponse::Created().json(TodoResponseBody::from(todo)))
}

/// Replace a todo's title, description and status.
///
/// Omitted fields are not preserved: a missing description is cleared and a
/// missing status resets to `pending`.
#[utoipa::path(
    put,
    path = "/api/todos/{id}",
    params(("id" = i32, Path, description = "Todo identifier")),
    request_body = TodoRequestBody,
    responses(
        (status = 200, description = "Todo updated", body = TodoResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "No such todo", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "updateTodo"
)]
#[put("/todos/{id}")]
pub async fn update_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<TodoRequestBody>,
) -> ApiResult<web::Json<TodoResponseBody>> {
    let TodoRequestBody {
        title,
        description,
        status,
    } = payload.into_inner();
    let draft = parse_todo_draft(title, description, status)?;
    let id = parse_todo_id(&path)?;
    let todo = state.todos.update(id, &draft).await?;
    info!(%id, "todo updated");
    Ok(web::Json(todo.into()))
}

/// Delete a todo.
#[utoipa::path(
    delete,
    path = "/api/todos/{id}",
    params(("id" = i32, Path, description = "Todo identifier")),
    responses(
        (status = 200, description = "Todo deleted", body = DeleteTodoResponseBody),
        (status = 404, description = "No such todo", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "deleteTodo"
)]
#[delete("/todos/{id}")]
pub async fn delete_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteTodoResponseBody>> {
    let id = parse_todo_id(&path)?;
    let removed = state.todos.delete(id).await?;
    info!(id = %removed, "todo deleted");
    Ok(web::Json(DeleteTodoResponseBody {
        message: DELETE_CONFIRMATION.to_owned(),
        id: removed.get(),
    }))
}

/// Register the todo routes under `/api`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use todo_backend::inbound::http::todos;
///
/// let _app = App::new().configure(todos::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .service(list_todos)
            .service(get_todo)
            .service(create_todo)
            .service(update_todo)
            .service(delete_todo),
    );
}

#[cfg(test)]
#[path = "todos_tests.rs"]
mod tests;
