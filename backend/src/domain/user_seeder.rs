//! Fail-fast batch insertion of users into the record store.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::NewUser;
use crate::domain::ports::{UserRepository, UserRepositoryError};

/// Number of inserts between progress log lines.
const PROGRESS_INTERVAL: usize = 1_000;

/// Result of a completed seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
    /// Number of users inserted.
    pub inserted: usize,
}

/// Errors that abort a seeding run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserSeedingError {
    /// The insert at the zero-based `index` failed; earlier inserts remain.
    #[error("failed to insert user at index {index}: {source}")]
    Insert {
        index: usize,
        #[source]
        source: UserRepositoryError,
    },
}

/// Sequentially inserts users, stopping at the first failure.
#[derive(Clone)]
pub struct UserSeeder<R> {
    repository: Arc<R>,
}

impl<R> UserSeeder<R>
where
    R: UserRepository,
{
    /// Create a seeder over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Insert every user in order.
    ///
    /// # Errors
    ///
    /// Returns [`UserSeedingError::Insert`] for the first insert that fails.
    /// Nothing after it is attempted and nothing before it is undone.
    pub async fn seed<I>(&self, users: I) -> Result<SeedOutcome, UserSeedingError>
    where
        I: IntoIterator<Item = NewUser>,
    {
        let mut inserted = 0_usize;
        for (index, user) in users.into_iter().enumerate() {
            let stored = self
                .repository
                .insert(&user)
                .await
                .map_err(|source| UserSeedingError::Insert { index, source })?;
            inserted = index.saturating_add(1);
            if inserted % PROGRESS_INTERVAL == 0 {
                info!(inserted, "seeding in progress");
            }
            debug!(id = %stored.id, "inserted user");
        }
        Ok(SeedOutcome { inserted })
    }
}
