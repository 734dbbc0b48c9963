//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! ports, so they can be exercised without a database.

use std::sync::Arc;

use crate::domain::ports::{TodoCommand, TodoQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub todos: Arc<dyn TodoCommand>,
    pub todos_query: Arc<dyn TodoQuery>,
}

impl HttpState {
    /// Bundle the command and query ports.
    pub fn new(todos: Arc<dyn TodoCommand>, todos_query: Arc<dyn TodoQuery>) -> Self {
        Self { todos, todos_query }
    }

    /// Build state from one value implementing both ports.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: TodoCommand + TodoQuery + 'static,
    {
        Self {
            todos: service.clone(),
            todos_query: service,
        }
    }
}
