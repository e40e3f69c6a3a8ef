//! Translation from pool and Diesel failures into repository port errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::UserRepositoryError;

use super::pool::PoolError;

/// Map pool errors to repository connection errors.
pub(super) fn map_pool_error(error: PoolError) -> UserRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to repository errors, keeping the driver message.
pub(super) fn map_diesel_error(error: DieselError) -> UserRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            UserRepositoryError::connection(info.message().to_owned())
        }
        other => UserRepositoryError::query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PoolError::checkout("timed out"), "timed out")]
    #[case(PoolError::build("bad url"), "bad url")]
    fn pool_errors_become_connection_errors(#[case] error: PoolError, #[case] expected: &str) {
        assert_eq!(
            map_pool_error(error),
            UserRepositoryError::connection(expected)
        );
    }

    #[rstest]
    fn not_found_becomes_a_query_error() {
        let mapped = map_diesel_error(DieselError::NotFound);
        assert_eq!(mapped, UserRepositoryError::query("Record not found"));
    }

    #[rstest]
    fn closed_connection_becomes_a_connection_error() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );
        assert_eq!(
            map_diesel_error(error),
            UserRepositoryError::connection("server closed the connection")
        );
    }

    #[rstest]
    fn database_errors_keep_their_message() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::Unknown,
            Box::new("relation \"users\" does not exist".to_owned()),
        );
        assert_eq!(
            map_diesel_error(error),
            UserRepositoryError::query("relation \"users\" does not exist")
        );
    }
}
