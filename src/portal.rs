//! Open the wishlist portal in the system browser.
//!
//! Uses the platform opener (`open` on macOS, `xdg-open` elsewhere on Unix,
//! `cmd /C start` on Windows). The opener hands the URL to the browser and
//! exits, so it is waited on before returning.

use std::process::{Command, ExitStatus, Stdio};

/// Errors that can occur while opening the portal.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("Refusing to open non-web URL: {0}")]
    InvalidUrl(String),

    #[error("No URL opener available on this platform")]
    UnsupportedPlatform,

    #[error("Opener '{tool}' failed: {source}")]
    SpawnFailed {
        tool: &'static str,
        source: std::io::Error,
    },

    #[error("Opener '{tool}' exited with {status}")]
    OpenerFailed {
        tool: &'static str,
        status: ExitStatus,
    },
}

/// Program and arguments that open `url` on this platform.
pub fn opener_command(url: &str) -> Option<(&'static str, Vec<String>)> {
    if cfg!(target_os = "macos") {
        Some(("open", vec![url.to_string()]))
    } else if cfg!(windows) {
        Some((
            "cmd",
            vec!["/C".into(), "start".into(), String::new(), url.to_string()],
        ))
    } else if cfg!(unix) {
        Some(("xdg-open", vec![url.to_string()]))
    } else {
        None
    }
}

/// Only http(s) links are handed to the opener.
pub fn validate_url(url: &str) -> Result<(), PortalError> {
    let lower = url.trim().to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        Ok(())
    } else {
        Err(PortalError::InvalidUrl(url.to_string()))
    }
}

/// Launch the system browser on `url`.
pub fn open(url: &str) -> Result<(), PortalError> {
    validate_url(url)?;
    let (tool, args) = opener_command(url).ok_or(PortalError::UnsupportedPlatform)?;
    launch(tool, &args)?;
    tracing::info!(url, tool, "portal opened");
    Ok(())
}

/// Run the opener to completion so no child is left behind.
fn launch(tool: &'static str, args: &[String]) -> Result<(), PortalError> {
    let status = Command::new(tool)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| PortalError::SpawnFailed { tool, source })?;

    if status.success() {
        Ok(())
    } else {
        Err(PortalError::OpenerFailed { tool, status })
    }
}
