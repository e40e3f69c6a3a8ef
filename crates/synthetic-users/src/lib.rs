//! Reproducible synthetic user records for seeding demonstration databases.
//!
//! The crate is deliberately independent of the backend's domain and
//! persistence types: it only knows how to produce plausible-looking user
//! rows. The backend converts each [`SyntheticUser`] into its own insert type.
//!
//! # Overview
//!
//! - Names are derived from the running index (`Name 1`, `Lastname 10`, ...).
//! - Ages are uniform in `[10, 70)`.
//! - Places of birth are drawn uniformly from a small city list.
//! - Salaries are uniform in `[40_000, 1_040_000)`.
//!
//! # Example
//!
//! ```
//! use synthetic_users::{GeneratorConfig, SyntheticUsers};
//!
//! let config = GeneratorConfig::default().with_count(3);
//! let users: Vec<_> = SyntheticUsers::from_seed(&config, 42)
//!     .expect("valid config")
//!     .collect();
//!
//! assert_eq!(users.len(), 3);
//! assert_eq!(users[0].name, "Name 1");
//! assert_eq!(users[2].last_name, "Lastname 30");
//! ```

mod error;
mod generator;
mod user;

pub use error::GenerationError;
pub use generator::{
    AGE_RANGE, DEFAULT_CITIES, DEFAULT_USER_COUNT, GeneratorConfig, SALARY_RANGE, SyntheticUsers,
};
pub use user::SyntheticUser;
