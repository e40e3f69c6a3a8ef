//! Layered process configuration.
//!
//! Each binary loads its settings through `ortho_config` (environment
//! variables and configuration files), then calls `validate` before opening
//! any socket or connection so misconfiguration fails at startup.

mod client;
mod database;
mod error;
mod query_service;

use std::ffi::OsString;
use std::net::SocketAddr;

pub use client::ClientSettings;
pub use database::{DatabaseSettings, SslMode};
pub use error::SettingsError;
pub use query_service::QueryServiceSettings;

/// Arguments handed to `ortho_config` so only the environment and config
/// files contribute values.
fn loader_args(binary: &str) -> [OsString; 1] {
    [OsString::from(binary)]
}

fn parse_bind_addr(field: &'static str, value: &str) -> Result<SocketAddr, SettingsError> {
    value
        .parse()
        .map_err(|err: std::net::AddrParseError| SettingsError::invalid(field, value, err.to_string()))
}
