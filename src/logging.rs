//! Tracing subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global subscriber according to `RUST_LOG` / `LOG_FORMAT`.
///
/// `log_level` is parsed as an [`EnvFilter`] directive string, so both plain
/// levels (`debug`) and per-target filters (`nagato_front=debug,tower_http=info`)
/// work.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}
