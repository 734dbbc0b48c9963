//! Builders wiring the Diesel repository into the HTTP state.

use std::sync::Arc;

use actix_web::web;

use todo_backend::domain::TodoService;
use todo_backend::inbound::http::state::HttpState;
use todo_backend::outbound::persistence::{DbPool, DieselTodoRepository};

/// Build handler state backed by PostgreSQL.
pub(crate) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    let repository = Arc::new(DieselTodoRepository::new(pool.clone()));
    let service = Arc::new(TodoService::new(repository));
    web::Data::new(HttpState::from_service(service))
}
