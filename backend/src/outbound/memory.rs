//! In-process `UserRepository` used by tests and local demos.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{NewUser, RecordLimit, User, UserId};

const CLOSED_MESSAGE: &str = "repository is closed";

#[derive(Debug)]
struct State {
    users: Vec<User>,
    next_id: i64,
    closed: bool,
}

/// Vector-backed repository with sequence-style identifiers starting at 1.
///
/// Rows are returned in insertion order. Closing behaves like the
/// PostgreSQL adapter: every later call fails with a connection error.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    state: Mutex<State>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self {
            state: Mutex::new(State {
                users: Vec::new(),
                next_id: 1,
                closed: false,
            }),
        }
    }
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `users`, assigning ids in order.
    pub fn with_users(users: impl IntoIterator<Item = NewUser>) -> Self {
        let repo = Self::default();
        {
            let mut state = repo.lock();
            for user in users {
                state.push(user);
            }
        }
        repo
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn open_state(&self) -> Result<std::sync::MutexGuard<'_, State>, UserRepositoryError> {
        let state = self.lock();
        if state.closed {
            return Err(UserRepositoryError::connection(CLOSED_MESSAGE));
        }
        Ok(state)
    }
}

impl State {
    fn push(&mut self, user: NewUser) -> User {
        let stored = user.with_id(UserId::new(self.next_id));
        self.next_id = self.next_id.saturating_add(1);
        self.users.push(stored.clone());
        stored
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn close(&self) -> Result<(), UserRepositoryError> {
        let mut state = self.open_state()?;
        state.closed = true;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.open_state()?.users.clone())
    }

    async fn fetch_limited(&self, limit: RecordLimit) -> Result<Vec<User>, UserRepositoryError> {
        let state = self.open_state()?;
        Ok(state.users.iter().take(limit.as_usize()).cloned().collect())
    }

    async fn fetch_by_min_age(&self, min_age: i32) -> Result<Vec<User>, UserRepositoryError> {
        let state = self.open_state()?;
        Ok(state
            .users
            .iter()
            .filter(|user| user.age >= min_age)
            .cloned()
            .collect())
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserRepositoryError> {
        Ok(self.open_state()?.push(user.clone()))
    }
}
