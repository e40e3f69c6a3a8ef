//! Generated user record type.

/// A generated user row without an identifier.
///
/// Identifiers are assigned by whichever store persists the record.
///
/// # Example
///
/// ```
/// use synthetic_users::SyntheticUser;
///
/// let user = SyntheticUser {
///     name: "Name 1".to_owned(),
///     last_name: "Lastname 10".to_owned(),
///     age: 33,
///     place_of_birth: "Kazan".to_owned(),
///     salary: 120_000,
/// };
///
/// assert_eq!(user.place_of_birth, "Kazan");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyntheticUser {
    /// Given name derived from the running index.
    pub name: String,
    /// Family name derived from the running index.
    pub last_name: String,
    /// Age in whole years.
    pub age: i32,
    /// Free-form place of birth drawn from the city list.
    pub place_of_birth: String,
    /// Salary in an unspecified currency unit.
    pub salary: i64,
}
