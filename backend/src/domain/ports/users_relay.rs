//! Driving port for the fetch-and-log client surface.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Use-case port: fetch users from the Query Service and log them locally.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRelay: Send + Sync {
    /// Fetch users with an optional raw limit, log them, and return them.
    async fn relay_users(&self, value: Option<String>) -> Result<Vec<User>, Error>;

    /// Fetch users from a raw age threshold, log them, and return them.
    async fn relay_users_from_age(&self, value: Option<String>) -> Result<Vec<User>, Error>;
}
