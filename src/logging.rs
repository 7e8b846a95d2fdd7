// ABOUTME: Logging initialisation for applications embedding docmint
// ABOUTME: Installs a tracing subscriber configured from LoggingConfig

use anyhow::{anyhow, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initialize logging based on configuration.
///
/// `RUST_LOG` takes precedence over the configured level. Fails if a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let log_level = if verbose { "debug" } else { &config.level };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let result = match config.format.as_str() {
        "compact" => tracing_subscriber::fmt()
            .compact()
            .with_env_filter(env_filter)
            .with_target(false)
            .try_init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .try_init(),
    };
    result.map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    debug!("Logging initialized with level: {}", log_level);
    Ok(())
}
