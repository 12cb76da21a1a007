// 📝 Logging - tracing subscriber setup
// Diagnostics go to stderr; stdout carries only the demonstration text.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is not set
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from RUST_LOG, falling back to [`DEFAULT_FILTER`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber (fails if one is already installed)
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
