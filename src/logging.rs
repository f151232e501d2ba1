//! Log file setup
//!
//! The terminal UI owns stdout, so tracing output goes to a file. Logging is
//! off unless `[logging] enabled = true` or `NPT_LOG` is set; `NPT_LOG`
//! doubles as the filter directive and wins over the configured level.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable that enables logging and sets its filter.
pub const LOG_ENV: &str = "NPT_LOG";

/// Default log file: `<state or data dir>/npt/npt.log`.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("npt").join("npt.log"))
}

/// Filter directive to use, or `None` when logging is disabled.
pub fn resolve_filter(config: &LoggingConfig, env_value: Option<String>) -> Option<String> {
    match env_value {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ if config.enabled => Some(config.level.clone()),
        _ => None,
    }
}

/// Install the global file subscriber. Returns the log path when logging is on.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    let Some(directive) = resolve_filter(config, std::env::var(LOG_ENV).ok()) else {
        return Ok(None);
    };

    let path = match config.file.clone().or_else(default_log_path) {
        Some(path) => path,
        None => return Ok(None),
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid log filter '{}'", directive))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(path = %path.display(), filter = %directive, "logging started");
    Ok(Some(path))
}
