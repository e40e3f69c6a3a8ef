//! Driving port for the Query Service.
//!
//! HTTP handlers call this port with already-validated parameters and never
//! see persistence types.

use async_trait::async_trait;

use crate::domain::{AgeThreshold, Error, User, UserSelection};

/// Domain use-case port for reading user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every user, or at most the selected number.
    async fn list_users(&self, selection: UserSelection) -> Result<Vec<User>, Error>;

    /// Return users whose age is at least the threshold.
    async fn list_users_from_age(&self, threshold: AgeThreshold) -> Result<Vec<User>, Error>;
}
