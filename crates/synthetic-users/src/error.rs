//! Error types for synthetic user generation.

use thiserror::Error;

/// Errors raised when a generator cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No places of birth were configured to draw from.
    #[error("city list must contain at least one entry")]
    EmptyCityList,

    /// A configured place of birth is blank.
    #[error("city at index {index} must not be blank")]
    BlankCity {
        /// Position of the blank entry in the configured list.
        index: usize,
    },
}
