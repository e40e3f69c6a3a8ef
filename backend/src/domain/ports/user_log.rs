//! Driven port for the client's append-only record log.

use async_trait::async_trait;

use crate::domain::User;

/// Failures writing the local log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserLogError {
    /// The log file could not be opened or created.
    #[error("failed to open user log {path}: {message}")]
    Open { path: String, message: String },
    /// A record could not be encoded as JSON.
    #[error("failed to encode user record: {message}")]
    Encode { message: String },
    /// Writing or flushing the log failed.
    #[error("failed to write user log: {message}")]
    Write { message: String },
}

impl UserLogError {
    /// Create an open error for the given path.
    pub fn open(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Open {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an encode error with the given message.
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }

    /// Create a write error with the given message.
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }
}

/// Append-only sink of fetched user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserLog: Send + Sync {
    /// Append each user as one JSON line.
    ///
    /// Concurrent calls never interleave their lines. A failure part way
    /// through leaves earlier lines in place.
    async fn append(&self, users: &[User]) -> Result<(), UserLogError>;
}
