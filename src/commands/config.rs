//! Config subcommands handler

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use npt::tui::current_theme;
use npt::Config;

/// Config file to use: the `--config` override or the default location.
pub fn resolve_path(override_path: Option<&Path>) -> Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::config_path()?),
    }
}

/// Load the effective configuration.
///
/// An explicit `--config` file must exist; the default location may be absent.
pub fn load(override_path: Option<&Path>) -> Result<Config> {
    let config = match override_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Show the effective configuration as TOML.
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = config.to_toml()?;
    if atty::is(atty::Stream::Stdout) {
        println!("{}", current_theme().primary_text(toml_str.trim_end()));
    } else {
        print!("{}", toml_str);
    }
    Ok(())
}

/// Print the config file location.
pub fn handle_path(override_path: Option<&Path>) -> Result<()> {
    println!("{}", resolve_path(override_path)?.display());
    Ok(())
}

/// Write a config file with default settings.
pub fn handle_init(override_path: Option<&Path>, force: bool) -> Result<()> {
    let path = resolve_path(override_path)?;
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    let message = format!("Wrote default config to {}", path.display());
    if atty::is(atty::Stream::Stdout) {
        println!("{}", current_theme().success_text(&message));
    } else {
        println!("{}", message);
    }
    Ok(())
}
