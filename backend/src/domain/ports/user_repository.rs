//! Port abstraction for the record store and its errors.

use async_trait::async_trait;

use crate::domain::{NewUser, RecordLimit, User};

/// Errors raised by record store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    /// The store is unreachable, its schema could not be reconciled, or the
    /// handle has been closed.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// A query or insert failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Capability over the persisted `users` table.
///
/// Opening a store is adapter specific and happens in each adapter's
/// constructor; everything after that goes through this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Release the underlying connections.
    ///
    /// Later calls, including a second `close`, fail with
    /// [`UserRepositoryError::Connection`].
    async fn close(&self) -> Result<(), UserRepositoryError>;

    /// Return every stored user in store order.
    async fn fetch_all(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Return at most `limit` users in store order.
    async fn fetch_limited(&self, limit: RecordLimit) -> Result<Vec<User>, UserRepositoryError>;

    /// Return every user whose age is at least `min_age`.
    async fn fetch_by_min_age(&self, min_age: i32) -> Result<Vec<User>, UserRepositoryError>;

    /// Persist a user and return it with its assigned identifier.
    async fn insert(&self, user: &NewUser) -> Result<User, UserRepositoryError>;
}
