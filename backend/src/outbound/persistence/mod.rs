//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides the [`UserRepository`](crate::domain::ports::UserRepository)
//! implementation backed by PostgreSQL, with async access through
//! `diesel-async` and `bb8` connection pooling.
//!
//! - **Thin adapter**: the repository only translates between Diesel rows
//!   and domain types.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: pool and Diesel failures map to `UserRepositoryError`.
//!
//! # Example
//!
//! ```ignore
//! use user_records::outbound::persistence::DieselUserRepository;
//! use user_records::settings::DatabaseSettings;
//!
//! let settings = DatabaseSettings::load_for("records-server")?;
//! let repo = DieselUserRepository::connect(&settings).await?;
//! ```

mod diesel_user_repository;
mod error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::{DieselUserRepository, MIGRATIONS};
pub use pool::{DbPool, PoolConfig, PoolError};
