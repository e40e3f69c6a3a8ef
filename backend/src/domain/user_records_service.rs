//! Query Service use-cases over the record store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{UserRepository, UserRepositoryError, UsersQuery};
use crate::domain::{AgeThreshold, Error, User, UserSelection};

/// Implements [`UsersQuery`] with exactly one repository call per request.
#[derive(Clone)]
pub struct UserRecordsService<R> {
    repository: Arc<R>,
}

impl<R> UserRecordsService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn fetch_error(context: &str, error: UserRepositoryError) -> Error {
    Error::internal(format!("{context}: {error}"))
}

#[async_trait]
impl<R> UsersQuery for UserRecordsService<R>
where
    R: UserRepository,
{
    async fn list_users(&self, selection: UserSelection) -> Result<Vec<User>, Error> {
        let users = match selection {
            UserSelection::All => self.repository.fetch_all().await,
            UserSelection::Limited(limit) => self.repository.fetch_limited(limit).await,
        }
        .map_err(|err| fetch_error("Error fetching records", err))?;

        debug!(?selection, count = users.len(), "fetched user records");
        Ok(users)
    }

    async fn list_users_from_age(&self, threshold: AgeThreshold) -> Result<Vec<User>, Error> {
        let users = self
            .repository
            .fetch_by_min_age(threshold.get())
            .await
            .map_err(|err| fetch_error("Error fetching records by age", err))?;

        debug!(age = threshold.get(), count = users.len(), "fetched user records by age");
        Ok(users)
    }
}

#[cfg(test)]
#[path = "user_records_service_tests.rs"]
mod tests;
