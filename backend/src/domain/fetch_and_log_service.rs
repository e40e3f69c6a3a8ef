//! Fetch-and-log use-cases for the client process.
//!
//! Each request fetches users from the Query Service, appends every record to
//! the local log, and hands the same records back to the caller.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{UserLog, UsersRelay, UsersSource};
use crate::domain::{Error, User};

/// Implements [`UsersRelay`] over a remote source and a local log.
#[derive(Clone)]
pub struct FetchAndLogService<S, L> {
    source: Arc<S>,
    log: Arc<L>,
}

impl<S, L> FetchAndLogService<S, L> {
    /// Create a new service from its source and log.
    pub fn new(source: Arc<S>, log: Arc<L>) -> Self {
        Self { source, log }
    }
}

impl<S, L> FetchAndLogService<S, L>
where
    S: UsersSource,
    L: UserLog,
{
    async fn log_and_return(&self, users: Vec<User>) -> Result<Vec<User>, Error> {
        self.log.append(&users).await.map_err(|err| {
            warn!(error = %err, "failed to log fetched users");
            Error::internal(err.to_string())
        })?;
        debug!(count = users.len(), "logged fetched users");
        Ok(users)
    }
}

#[async_trait]
impl<S, L> UsersRelay for FetchAndLogService<S, L>
where
    S: UsersSource,
    L: UserLog,
{
    async fn relay_users(&self, value: Option<String>) -> Result<Vec<User>, Error> {
        let users = self.source.fetch_users(value).await.map_err(|err| {
            warn!(error = %err, "failed to fetch users");
            Error::internal(err.to_string())
        })?;
        self.log_and_return(users).await
    }

    async fn relay_users_from_age(&self, value: Option<String>) -> Result<Vec<User>, Error> {
        let age = value.unwrap_or_default();
        let users = self
            .source
            .fetch_users_from_age(age)
            .await
            .map_err(|err| {
                warn!(error = %err, "failed to fetch users by age");
                Error::internal(err.to_string())
            })?;
        self.log_and_return(users).await
    }
}
