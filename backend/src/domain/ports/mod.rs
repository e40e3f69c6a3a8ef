//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`UsersQuery`, `UsersRelay`) are what inbound adapters call.
//! Driven ports (`UserRepository`, `UsersSource`, `UserLog`) are implemented
//! by outbound adapters and consumed by domain services.

mod user_log;
mod user_repository;
mod users_query;
mod users_relay;
mod users_source;

#[cfg(test)]
pub use user_log::MockUserLog;
pub use user_log::{UserLog, UserLogError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
#[cfg(test)]
pub use users_relay::MockUsersRelay;
pub use users_relay::UsersRelay;
#[cfg(test)]
pub use users_source::MockUsersSource;
pub use users_source::{UsersSource, UsersSourceError};
