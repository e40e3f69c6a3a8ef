//! User data model.
//!
//! `User` is the only persisted entity. Its JSON shape is shared by the Query
//! Service responses, the client's decoded payloads, and the JSON-lines log.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned user identifier.
///
/// Identifiers are allocated once on insert and never reused. The value
/// serialises as a bare JSON integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i64, example = 1)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// A stored user record.
///
/// # Examples
/// ```
/// use user_records::domain::{User, UserId};
///
/// let user = User {
///     id: UserId::new(1),
///     name: "Name 1".into(),
///     last_name: "Lastname 10".into(),
///     age: 42,
///     place_of_birth: "Kazan".into(),
///     salary: 120_000,
/// };
/// let json = serde_json::to_value(&user).expect("serialise user");
/// assert_eq!(json["lastName"], "Lastname 10");
/// assert_eq!(json["placeOfBirth"], "Kazan");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier.
    pub id: UserId,
    /// Given name.
    #[schema(example = "Name 1")]
    pub name: String,
    /// Family name.
    #[schema(example = "Lastname 10")]
    pub last_name: String,
    /// Age in whole years.
    #[schema(example = 42)]
    pub age: i32,
    /// Free-form place of birth.
    #[schema(example = "Kazan")]
    pub place_of_birth: String,
    /// Salary, currency agnostic.
    #[schema(example = 120_000)]
    pub salary: i64,
}

/// A user awaiting insertion; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Given name.
    pub name: String,
    /// Family name.
    pub last_name: String,
    /// Age in whole years.
    pub age: i32,
    /// Free-form place of birth.
    pub place_of_birth: String,
    /// Salary, currency agnostic.
    pub salary: i64,
}

impl NewUser {
    /// Attach a store-assigned identifier, producing the stored record.
    pub fn with_id(self, id: UserId) -> User {
        let Self {
            name,
            last_name,
            age,
            place_of_birth,
            salary,
        } = self;
        User {
            id,
            name,
            last_name,
            age,
            place_of_birth,
            salary,
        }
    }
}

impl From<synthetic_users::SyntheticUser> for NewUser {
    fn from(user: synthetic_users::SyntheticUser) -> Self {
        Self {
            name: user.name,
            last_name: user.last_name,
            age: user.age,
            place_of_birth: user.place_of_birth,
            salary: user.salary,
        }
    }
}

#[cfg(test)]
mod tests;
