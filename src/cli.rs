//! Command-line interface definitions
//!
//! Lives in the library so the xtask crate can render man pages from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version string: package version, plus git SHA on dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("NPT_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("NPT_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "npt",
    version = VERSION,
    about = "North Pole Terminal - a Secret Santa reveal in a fake terminal",
    long_about = "Plays a scripted ssh session that reveals your Secret Santa target, \
then drops you at a toy prompt. Type 'help' at the prompt for commands."
)]
pub struct Cli {
    #[command(flatten)]
    pub run: RunArgs,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options for the interactive terminal.
#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Seed the random source for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,

    /// Clock multiplier (0.1 to 16)
    #[arg(long)]
    pub speed: Option<f64>,

    /// Transliterate emoji and other non-ASCII text
    #[arg(long)]
    pub ascii: bool,

    /// Color theme: terminal, classic or ocean
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a session on a simulated clock and print the result
    Replay(ReplayArgs),

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// Seed the random source
    #[arg(long)]
    pub seed: Option<u64>,

    /// Command to submit once the prompt is ready (repeatable)
    #[arg(short = 'c', long = "command", value_name = "CMD")]
    pub commands: Vec<String>,

    /// Simulated milliseconds between submitted commands
    #[arg(long, default_value_t = 250)]
    pub gap_ms: u64,

    /// Simulated milliseconds to run after the last command
    #[arg(long, default_value_t = 7000)]
    pub settle_ms: u64,

    /// Print the final snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
