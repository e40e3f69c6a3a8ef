//! Request-parameter policies for the user queries.
//!
//! The Query Service accepts loosely typed query and path parameters. These
//! types turn raw text into validated selections before any store call is
//! made, so the HTTP layer stays free of parsing rules.

use std::fmt;
use std::num::NonZeroU64;

use super::Error;

/// Smallest age threshold the service rejects; valid thresholds exceed it.
pub const MIN_AGE_EXCLUSIVE: i32 = 10;

/// Body returned when an age threshold fails validation.
pub const INVALID_AGE_MESSAGE: &str = "Invalid age parameter";

/// Strictly positive cap on the number of returned records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordLimit(NonZeroU64);

impl RecordLimit {
    /// Build a limit from a signed value, returning `None` unless positive.
    ///
    /// # Examples
    /// ```
    /// use user_records::domain::RecordLimit;
    ///
    /// assert_eq!(RecordLimit::new(5).map(RecordLimit::get), Some(5));
    /// assert!(RecordLimit::new(0).is_none());
    /// assert!(RecordLimit::new(-3).is_none());
    /// ```
    pub fn new(value: i64) -> Option<Self> {
        u64::try_from(value)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
    }

    /// The limit as a signed value suitable for SQL `LIMIT`.
    pub fn get(self) -> i64 {
        // Constructed from a positive i64, so the conversion cannot fail.
        i64::try_from(self.0.get()).unwrap_or(i64::MAX)
    }

    /// The limit as a collection length.
    pub fn as_usize(self) -> usize {
        usize::try_from(self.0.get()).unwrap_or(usize::MAX)
    }
}

impl fmt::Display for RecordLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which records a `/users` request selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSelection {
    /// Every record in the store.
    All,
    /// At most the given number of records.
    Limited(RecordLimit),
}

impl UserSelection {
    /// Interpret the raw `limit` query parameter.
    ///
    /// Absent, empty, non-numeric, out-of-range, zero, or negative input all
    /// select every record.
    ///
    /// # Examples
    /// ```
    /// use user_records::domain::{RecordLimit, UserSelection};
    ///
    /// assert_eq!(UserSelection::from_limit_param(None), UserSelection::All);
    /// assert_eq!(UserSelection::from_limit_param(Some("abc")), UserSelection::All);
    /// assert_eq!(UserSelection::from_limit_param(Some("-1")), UserSelection::All);
    /// assert_eq!(
    ///     UserSelection::from_limit_param(Some("2")),
    ///     UserSelection::Limited(RecordLimit::new(2).expect("positive"))
    /// );
    /// ```
    pub fn from_limit_param(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse::<i64>().ok())
            .and_then(RecordLimit::new)
            .map_or(Self::All, Self::Limited)
    }
}

/// Inclusive lower bound on age, strictly greater than [`MIN_AGE_EXCLUSIVE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgeThreshold(i32);

/// Raised when an age path segment is not an integer above the minimum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid age parameter")]
pub struct AgeThresholdError {
    raw: String,
}

impl AgeThresholdError {
    /// The rejected input.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl AgeThreshold {
    /// Parse a path segment into a threshold.
    ///
    /// # Errors
    ///
    /// Returns [`AgeThresholdError`] when the input is not a 64-bit integer or
    /// is not greater than [`MIN_AGE_EXCLUSIVE`]. Values beyond the `i32` age
    /// column saturate at `i32::MAX`.
    ///
    /// # Examples
    /// ```
    /// use user_records::domain::AgeThreshold;
    ///
    /// assert_eq!(AgeThreshold::parse("12").map(AgeThreshold::get), Ok(12));
    /// assert!(AgeThreshold::parse("10").is_err());
    /// assert!(AgeThreshold::parse("twelve").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, AgeThresholdError> {
        match raw.parse::<i64>() {
            Ok(age) if age > i64::from(MIN_AGE_EXCLUSIVE) => {
                Ok(Self(i32::try_from(age).unwrap_or(i32::MAX)))
            }
            _ => Err(AgeThresholdError {
                raw: raw.to_owned(),
            }),
        }
    }

    /// The threshold value.
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Whether a record of the given age passes the inclusive filter.
    pub const fn admits(self, age: i32) -> bool {
        age >= self.0
    }
}

impl fmt::Display for AgeThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AgeThresholdError> for Error {
    fn from(_: AgeThresholdError) -> Self {
        Error::invalid_request(INVALID_AGE_MESSAGE)
    }
}
