//! Fetch-and-log client process settings.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use super::{SettingsError, loader_args, parse_bind_addr};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8083";
const DEFAULT_QUERY_SERVICE_URL: &str = "http://localhost:8082";
const DEFAULT_LOG_PATH: &str = "users.json";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration for the fetch-and-log client.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_RECORDS_CLIENT")]
pub struct ClientSettings {
    /// Socket address to listen on.
    #[ortho_config(default = String::from(DEFAULT_BIND_ADDR))]
    pub bind_addr: Option<String>,
    /// Base URL of the Query Service.
    pub query_service_url: Option<String>,
    /// JSON-lines log file, relative to the working directory.
    pub log_path: Option<PathBuf>,
    /// Directory served under `/static`.
    pub static_dir: Option<PathBuf>,
    /// Timeout applied to each Query Service request.
    #[ortho_config(default = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: Option<u64>,
}

impl ClientSettings {
    /// Load settings from the environment and configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when the sources cannot be merged.
    pub fn load_for(binary: &str) -> Result<Self, SettingsError> {
        Self::load_from_iter(loader_args(binary))
            .map_err(|err| SettingsError::load("client", err.to_string()))
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

    /// Query Service base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] for unparsable or non-HTTP URLs.
    pub fn query_service_url(&self) -> Result<Url, SettingsError> {
        let raw = self
            .query_service_url
            .as_deref()
            .unwrap_or(DEFAULT_QUERY_SERVICE_URL);
        let url = Url::parse(raw)
            .map_err(|err| SettingsError::invalid("query_service_url", raw, err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(SettingsError::invalid(
                "query_service_url",
                raw,
                "expected an http or https base URL",
            ));
        }
        Ok(url)
    }

    /// Log file path, defaulting to `users.json`.
    pub fn log_path(&self) -> &Path {
        self.log_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_LOG_PATH))
    }

    /// Static asset directory, defaulting to `static`.
    pub fn static_dir(&self) -> &Path {
        self.static_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_STATIC_DIR))
    }

    /// Per-request timeout towards the Query Service.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] when the timeout is zero.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        match self.request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS) {
            0 => Err(SettingsError::invalid(
                "request_timeout_secs",
                "0",
                "timeout must be positive",
            )),
            secs => Ok(Duration::from_secs(secs)),
        }
    }

    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`SettingsError`] found.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.bind_addr()?;
        self.query_service_url()?;
        self.request_timeout()?;
        if self.log_path().file_name().is_none() {
            return Err(SettingsError::invalid(
                "log_path",
                self.log_path().display().to_string(),
                "expected a file path",
            ));
        }
        if self.static_dir().as_os_str().is_empty() {
            return Err(SettingsError::empty("static_dir"));
        }
        Ok(())
    }
}
