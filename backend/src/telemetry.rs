//! Tracing subscriber initialisation shared by every binary.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter applied when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the JSON formatter as the global subscriber.
///
/// Calling this more than once is harmless: later calls log a warning through
/// the subscriber that is already installed.
pub fn init_tracing() {
    if let Err(error) = fmt().with_env_filter(env_filter()).json().try_init() {
        warn!(%error, "tracing init failed");
    }
}
