//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every todo endpoint, the health probes, and the schema
//! wrappers from `inbound::http::schemas`. Swagger UI serves it in debug
//! builds and `cargo run --bin openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::todos::{DeleteTodoResponseBody, TodoRequestBody, TodoResponseBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        description = "Create, list, update and delete todos.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::todos::list_todos,
        crate::inbound::http::todos::get_todo,
        crate::inbound::http::todos::create_todo,
        crate::inbound::http::todos::update_todo,
        crate::inbound::http::todos::delete_todo,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        TodoRequestBody,
        TodoResponseBody,
        DeleteTodoResponseBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "todos", description = "Todo CRUD operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
