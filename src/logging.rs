//! Logging setup: console output plus a log file under the configured
//! logs directory

use std::fs::OpenOptions;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::AppConfig;

/// Install the global subscriber.
///
/// Writes to stderr and appends to `investtracker.log` in the config's logs
/// directory. The configured level acts as the default filter; `RUST_LOG`
/// overrides it. Calling this again once a subscriber is installed is a
/// no-op, so tests and embedders can call it unconditionally.
pub fn init(config: &AppConfig) -> Result<()> {
    let log_file = config.logs_dir().join("investtracker.log");
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();

    tracing::info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_is_idempotent_and_creates_the_log_file() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::default_with_dir(dir.path().to_path_buf());
        init(&config).unwrap();
        init(&config).unwrap();
        assert!(config.logs_dir().join("investtracker.log").exists());
    }
}
