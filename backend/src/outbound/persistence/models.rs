//! Diesel row types for the `users` table.
//!
//! These are internal to the persistence adapter; the domain only sees
//! [`User`] and [`NewUser`].

use diesel::prelude::*;

use crate::domain::{NewUser, User, UserId};

use super::schema::users;

/// A row read from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub age: i32,
    pub place_of_birth: String,
    pub salary: i64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            name: row.name,
            last_name: row.last_name,
            age: row.age,
            place_of_birth: row.place_of_birth,
            salary: row.salary,
        }
    }
}

/// Values inserted into `users`; the id comes from the sequence.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub last_name: &'a str,
    pub age: i32,
    pub place_of_birth: &'a str,
    pub salary: i64,
}

impl<'a> From<&'a NewUser> for NewUserRow<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            name: &user.name,
            last_name: &user.last_name,
            age: user.age,
            place_of_birth: &user.place_of_birth,
            salary: user.salary,
        }
    }
}
