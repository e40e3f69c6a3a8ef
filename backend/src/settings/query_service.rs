//! Query Service process settings.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use super::{SettingsError, loader_args, parse_bind_addr};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8082";

/// Listener configuration for the Query Service.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_RECORDS_SERVER")]
pub struct QueryServiceSettings {
    /// Socket address to listen on.
    #[ortho_config(default = String::from(DEFAULT_BIND_ADDR))]
    pub bind_addr: Option<String>,
}

impl QueryServiceSettings {
    /// Load settings from the environment and configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when the sources cannot be merged.
    pub fn load_for(binary: &str) -> Result<Self, SettingsError> {
        Self::load_from_iter(loader_args(binary))
            .map_err(|err| SettingsError::load("query service", err.to_string()))
    }

    /// Configured listen address, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] when the address does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        parse_bind_addr(
            "bind_addr",
            self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR),
        )
    }

    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`SettingsError`] found.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.bind_addr().map(|_| ())
    }
}
