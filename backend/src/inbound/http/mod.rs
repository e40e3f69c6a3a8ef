//! HTTP inbound adapters for the Query Service and the fetch-and-log client.

pub mod error;
pub mod fetch_log;
pub mod health;
pub mod landing;
pub mod state;
pub mod users;

pub use error::ApiResult;
