//! Subcommand handlers

pub mod config;
pub mod replay;
pub mod run;

use std::io;

use clap::CommandFactory;
use clap_complete::Shell;

use npt::cli::Cli;

/// Write shell completions to stdout.
pub fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "npt", &mut io::stdout());
}
