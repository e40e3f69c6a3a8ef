//! Record store connection settings.

use std::fmt;
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;
use zeroize::Zeroizing;

use super::{SettingsError, loader_args};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_USER: &str = "postgres";
const DEFAULT_NAME: &str = "user_records";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL `sslmode` connection parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SslMode {
    /// No TLS.
    #[default]
    Disable,
    /// TLS only if the server insists.
    Allow,
    /// TLS when available.
    Prefer,
    /// TLS without certificate verification.
    Require,
    /// TLS with CA verification.
    VerifyCa,
    /// TLS with CA and host name verification.
    VerifyFull,
}

impl SslMode {
    /// Value used in the connection URL.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disable => "disable",
            Self::Allow => "allow",
            Self::Prefer => "prefer",
            Self::Require => "require",
            Self::VerifyCa => "verify-ca",
            Self::VerifyFull => "verify-full",
        }
    }
}

impl FromStr for SslMode {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "disable" => Ok(Self::Disable),
            "allow" => Ok(Self::Allow),
            "prefer" => Ok(Self::Prefer),
            "require" => Ok(Self::Require),
            "verify-ca" => Ok(Self::VerifyCa),
            "verify-full" => Ok(Self::VerifyFull),
            _ => Err(SettingsError::invalid(
                "ssl_mode",
                value,
                "expected one of disable, allow, prefer, require, verify-ca, verify-full",
            )),
        }
    }
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection target for the `users` table.
///
/// Every field is optional. The port and pool size carry loader defaults so
/// an empty environment still merges; accessors apply the remaining defaults
/// for a local PostgreSQL instance.
#[derive(Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_RECORDS_DB")]
pub struct DatabaseSettings {
    /// Server host name or address.
    pub host: Option<String>,
    /// Server port.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: Option<u16>,
    /// Role to connect as.
    pub user: Option<String>,
    /// Role password.
    pub password: Option<String>,
    /// Database name.
    pub name: Option<String>,
    /// `sslmode` parameter.
    pub ssl_mode: Option<String>,
    /// Upper bound on pooled connections.
    #[ortho_config(default = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: Option<u32>,
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl DatabaseSettings {
    /// Load settings from the environment and configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when the sources cannot be merged.
    pub fn load_for(binary: &str) -> Result<Self, SettingsError> {
        Self::load_from_iter(loader_args(binary))
            .map_err(|err| SettingsError::load("database", err.to_string()))
    }

    /// Host, defaulting to `localhost`.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Port, defaulting to 5432.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Role, defaulting to `postgres`.
    pub fn user(&self) -> &str {
        self.user.as_deref().unwrap_or(DEFAULT_USER)
    }

    /// Database name, defaulting to `user_records`.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    /// Pool size, defaulting to 10.
    pub fn max_connections(&self) -> u32 {
        self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    /// Parsed `sslmode`, defaulting to `disable`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] for unknown modes.
    pub fn ssl_mode(&self) -> Result<SslMode, SettingsError> {
        self.ssl_mode
            .as_deref()
            .map_or(Ok(SslMode::default()), str::parse)
    }

    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`SettingsError`] found.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [("host", self.host()), ("user", self.user()), ("name", self.name())] {
            if value.trim().is_empty() {
                return Err(SettingsError::empty(field));
            }
        }
        if self.port() == 0 {
            return Err(SettingsError::invalid("port", "0", "port must be non-zero"));
        }
        if self.max_connections() == 0 {
            return Err(SettingsError::invalid(
                "max_connections",
                "0",
                "pool needs at least one connection",
            ));
        }
        self.ssl_mode().map(|_| ())
    }

    /// Render the PostgreSQL connection URL.
    ///
    /// The result may embed the password, so it is returned in a buffer that
    /// is wiped on drop.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a field is invalid or cannot be encoded
    /// into a URL.
    pub fn database_url(&self) -> Result<Zeroizing<String>, SettingsError> {
        self.validate()?;
        let mut url = Url::parse("postgres://localhost")
            .map_err(|err| SettingsError::invalid("database_url", "postgres://", err.to_string()))?;
        url.set_host(Some(self.host()))
            .map_err(|err| SettingsError::invalid("host", self.host(), err.to_string()))?;
        url.set_port(Some(self.port()))
            .map_err(|()| SettingsError::invalid("port", self.port().to_string(), "cannot be set"))?;
        url.set_username(self.user())
            .map_err(|()| SettingsError::invalid("user", self.user(), "cannot be set"))?;
        if let Some(password) = self.password.as_deref() {
            let secret = Zeroizing::new(password.to_owned());
            url.set_password(Some(secret.as_str()))
                .map_err(|()| SettingsError::invalid("password", "<redacted>", "cannot be set"))?;
        }
        url.path_segments_mut()
            .map_err(|()| SettingsError::invalid("name", self.name(), "cannot be set"))?
            .push(self.name());
        url.query_pairs_mut()
            .append_pair("sslmode", self.ssl_mode()?.as_str());
        Ok(Zeroizing::new(String::from(url)))
    }
}
