//! npt - North Pole Terminal

mod commands;

use anyhow::Result;
use clap::Parser;

use npt::cli::{Cli, Commands, ConfigCommands};
use npt::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        None => {
            let config = commands::config::load(config_path)?;
            init_logging(&config);
            commands::run::handle_run(&cli.run, &config)
        }
        Some(Commands::Replay(args)) => {
            let config = commands::config::load(config_path)?;
            init_logging(&config);
            commands::replay::handle_replay(&args, &config)
        }
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => {
                let config = commands::config::load(config_path)?;
                commands::config::handle_show(&config)
            }
            ConfigCommands::Path => commands::config::handle_path(config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(config_path, force),
        },
        Some(Commands::Completions { shell }) => {
            commands::handle_completions(shell);
            Ok(())
        }
    }
}

/// Logging problems never stop the program.
fn init_logging(config: &npt::Config) {
    if let Err(e) = logging::init(&config.logging) {
        eprintln!("warning: {:#}", e);
    }
}
