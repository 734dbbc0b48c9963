//! Translation of pool and Diesel failures into repository errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::TodoRepositoryError;

use super::pool::PoolError;

/// Pool failures always mean the store is unreachable.
pub(crate) fn map_pool_error(error: PoolError) -> TodoRepositoryError {
    debug!(%error, "connection pool failure");
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    TodoRepositoryError::connection(message)
}

/// Map a Diesel error, keeping driver detail out of the returned message.
pub(crate) fn map_diesel_error(error: DieselError) -> TodoRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => TodoRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => TodoRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            TodoRepositoryError::connection("database connection error")
        }
        DieselError::DeserializationError(_) => {
            TodoRepositoryError::query("failed to decode database row")
        }
        _ => TodoRepositoryError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let mapped = map_pool_error(PoolError::checkout("timed out waiting"));
        assert_eq!(mapped, TodoRepositoryError::connection("timed out waiting"));
    }

    #[rstest]
    fn not_found_becomes_query_error() {
        assert_eq!(
            map_diesel_error(DieselError::NotFound),
            TodoRepositoryError::query("record not found")
        );
    }

    #[rstest]
    fn closed_connection_becomes_connection_error() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );
        assert!(matches!(
            map_diesel_error(error),
            TodoRepositoryError::Connection { .. }
        ));
    }

    #[rstest]
    fn constraint_violation_hides_driver_message() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::CheckViolation,
            Box::new("new row violates check constraint \"todos_status_check\"".to_owned()),
        );
        assert_eq!(
            map_diesel_error(error),
            TodoRepositoryError::query("database error")
        );
    }
}
