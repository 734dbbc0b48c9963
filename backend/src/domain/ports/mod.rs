//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports ([`TodoRepository`]) are implemented by outbound adapters;
//! driving ports ([`TodoCommand`], [`TodoQuery`]) are what inbound adapters
//! call. Repository failures use typed errors so adapters map into predictable
//! variants.

mod macros;
mod todo_command;
mod todo_query;
mod todo_repository;

pub(crate) use macros::define_port_error;

#[cfg(test)]
pub use todo_command::MockTodoCommand;
pub use todo_command::TodoCommand;
#[cfg(test)]
pub use todo_query::MockTodoQuery;
pub use todo_query::TodoQuery;
#[cfg(test)]
pub use todo_repository::MockTodoRepository;
pub use todo_repository::{TodoRepository, TodoRepositoryError};
