//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! [`DieselUserRepository::connect`] applies the embedded migrations over a
//! blocking connection and then opens an async `bb8` pool. Dropping the pool
//! through [`UserRepository::close`] makes every later call fail with a
//! connection error.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::PgConnection;
use diesel_async::RunQueryDsl;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{NewUser, RecordLimit, User};
use crate::settings::DatabaseSettings;

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolConfig};
use super::schema::users;

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const CLOSED_MESSAGE: &str = "repository is closed";

/// Diesel-backed implementation of the `UserRepository` port.
pub struct DieselUserRepository {
    pool: RwLock<Option<DbPool>>,
}

impl DieselUserRepository {
    /// Wrap an existing pool. The schema is assumed to be in place.
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool: RwLock::new(Some(pool)),
        }
    }

    /// Open the store described by `settings`.
    ///
    /// Pending migrations are applied before the pool is built, so a store
    /// that cannot be reached or migrated fails here rather than on the first
    /// request.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Connection`] when the URL is invalid,
    /// the server is unreachable, a migration fails, or the pool cannot be
    /// built.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, UserRepositoryError> {
        let url = settings
            .database_url()
            .map_err(|err| UserRepositoryError::connection(err.to_string()))?;

        run_migrations(url.clone()).await?;

        let config = PoolConfig::new(url.as_str()).with_max_size(settings.max_connections());
        let pool = DbPool::new(config).await.map_err(map_pool_error)?;
        info!(
            host = settings.host(),
            database = settings.name(),
            "user repository connected"
        );
        Ok(Self::new(pool))
    }

    fn pool(&self) -> Result<DbPool, UserRepositoryError> {
        self.pool
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or_else(|| UserRepositoryError::connection(CLOSED_MESSAGE))
    }
}

async fn run_migrations(url: Zeroizing<String>) -> Result<(), UserRepositoryError> {
    tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(url.as_str())
            .map_err(|err| UserRepositoryError::connection(err.to_string()))?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| UserRepositoryError::connection(err.to_string()))?;
        debug!(count = applied.len(), "applied pending migrations");
        Ok(())
    })
    .await
    .map_err(|err| UserRepositoryError::connection(err.to_string()))?
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn close(&self) -> Result<(), UserRepositoryError> {
        let pool = self
            .pool
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match pool {
            Some(_) => {
                info!("user repository closed");
                Ok(())
            }
            None => Err(UserRepositoryError::connection(CLOSED_MESSAGE)),
        }
    }

    async fn fetch_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let pool = self.pool()?;
        let mut conn = pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn fetch_limited(&self, limit: RecordLimit) -> Result<Vec<User>, UserRepositoryError> {
        let pool = self.pool()?;
        let mut conn = pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .limit(limit.get())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn fetch_by_min_age(&self, min_age: i32) -> Result<Vec<User>, UserRepositoryError> {
        let pool = self.pool()?;
        let mut conn = pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRow> = users::table
            .filter(users::age.ge(min_age))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserRepositoryError> {
        let pool = self.pool()?;
        let mut conn = pool.get().await.map_err(map_pool_error)?;
        let row: UserRow = diesel::insert_into(users::table)
            .values(NewUserRow::from(user))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(User::from(row))
    }
}
