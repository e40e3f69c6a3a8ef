//! Domain primitives, policies, and services.
//!
//! Purpose: define the user record, the request-parameter policies of the
//! Query Service, and the use-cases both HTTP processes run. Nothing here
//! knows about HTTP, SQL, or the filesystem; adapters reach the domain through
//! [`ports`].
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `User` / `UserId` / `NewUser`: the persisted entity.
//! - `UserSelection` / `RecordLimit` / `AgeThreshold`: validated parameters.
//! - `UserRecordsService`, `FetchAndLogService`, `UserSeeder`: use-cases.

pub mod error;
mod fetch_and_log_service;
pub mod ports;
pub mod user;
mod user_query;
mod user_records_service;
mod user_seeder;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::fetch_and_log_service::FetchAndLogService;
pub use self::user::{NewUser, User, UserId};
pub use self::user_query::{
    AgeThreshold, AgeThresholdError, INVALID_AGE_MESSAGE, MIN_AGE_EXCLUSIVE, RecordLimit,
    UserSelection,
};
pub use self::user_records_service::UserRecordsService;
pub use self::user_seeder::{SeedOutcome, UserSeeder, UserSeedingError};
