//! Driven port used by the client to read users from the Query Service.

use async_trait::async_trait;

use crate::domain::User;

/// Transport failures talking to the Query Service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsersSourceError {
    /// The request could not be sent or the response could not be read.
    #[error("query service request failed: {message}")]
    Transport { message: String },
    /// The Query Service answered with a non-success status.
    #[error("query service responded with status {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body was not a JSON array of users.
    #[error("query service returned an undecodable body: {message}")]
    Decode { message: String },
}

impl UsersSourceError {
    /// Create a transport error with the given message.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a status error from the downstream status and body.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error with the given message.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Remote source of user records.
///
/// Parameters are forwarded verbatim; validation is the Query Service's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersSource: Send + Sync {
    /// Fetch users, forwarding `limit` when one was supplied.
    async fn fetch_users(&self, limit: Option<String>) -> Result<Vec<User>, UsersSourceError>;

    /// Fetch users whose age is at least `age`.
    async fn fetch_users_from_age(&self, age: String) -> Result<Vec<User>, UsersSourceError>;
}
