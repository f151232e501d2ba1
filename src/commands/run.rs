//! Interactive terminal handler

use anyhow::{anyhow, bail, Result};
use tracing::info;

use npt::cli::RunArgs;
use npt::config::SessionConfig;
use npt::tui::{install_theme, RunOptions, SantaApp, Theme};
use npt::{Config, Session};

/// Resolve CLI flags over config values into run options.
pub fn build_options(args: &RunArgs, config: &Config, snow_seed: u64) -> Result<RunOptions> {
    let theme_name = args.theme.as_deref().unwrap_or(&config.display.theme);
    let theme = Theme::by_name(theme_name).ok_or_else(|| {
        anyhow!(
            "Unknown theme '{}'. Available: {}",
            theme_name,
            Theme::NAMES.join(", ")
        )
    })?;

    let speed = SessionConfig {
        seed: None,
        speed: args.speed.unwrap_or(config.session.speed),
    }
    .effective_speed();

    Ok(RunOptions {
        speed,
        ascii_only: args.ascii || config.display.ascii_only,
        theme,
        snowflakes: config.display.snowflakes,
        snow_seed,
    })
}

/// Run the interactive terminal.
#[cfg(not(tarpaulin_include))]
pub fn handle_run(args: &RunArgs, config: &Config) -> Result<()> {
    let seed = args.seed.or(config.session.seed);
    let options = build_options(args, config, seed.unwrap_or_else(rand::random))?;

    if !atty::is(atty::Stream::Stdout) {
        bail!("npt needs an interactive terminal; use `npt replay` for headless output");
    }
    install_theme(options.theme.clone());

    let session = match seed {
        Some(seed) => Session::seeded(seed),
        None => Session::from_entropy(),
    }
    .with_portal_url(config.portal.url.clone());

    let reason = {
        let mut app = SantaApp::new(session, options)?;
        app.run()?
    };
    info!(?reason, "terminal closed");
    Ok(())
}
