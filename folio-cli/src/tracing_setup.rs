//! Tracing setup for the folio CLI
//!
//! Usage:
//!   folio --debug ...              # Debug logging to stderr
//!   RUST_LOG=folio_core=debug folio  # Fine-grained log control
//!
//! Environment variables:
//!   RUST_LOG                       # Log filter (default: info)
//!
//! Logs always go to stderr so command output on stdout stays clean. The TUI
//! only installs a subscriber with `--debug`, since writes would land on the
//! alternate screen.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
}

fn filter(config: &TracingConfig) -> EnvFilter {
    if config.debug {
        // Debug mode: set debug level unless RUST_LOG is explicitly set
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize console tracing on stderr
pub fn init(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_target(config.debug) // Show targets in debug mode
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
