//! Logging set-up for the request runner.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::RunConfig;

/// Installs a global `tracing` subscriber that writes to stderr.
///
/// `RUST_LOG` takes precedence; otherwise the filter comes from
/// [`RunConfig::default_log_filter`].
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &RunConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!(verbose = config.verbose, "logging initialized");

    Ok(())
}
