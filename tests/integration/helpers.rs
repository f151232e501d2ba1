//! Shared helpers for integration tests

use std::path::Path;
use std::process::Command;

use npt::session::state::FINAL_STEP;
use npt::session::{Millis, TICK_INTERVAL_MS};
use npt::Session;

/// Session time at which the prompt becomes ready.
pub const PROMPT_READY_AT: Millis = FINAL_STEP as Millis * TICK_INTERVAL_MS;

/// A started session advanced until the prompt accepts input.
pub fn ready_session(seed: u64) -> Session {
    let mut session = Session::seeded(seed);
    session.start();
    session.advance_to(PROMPT_READY_AT);
    assert!(session.accepts_input());
    session
}

/// Type and submit one command line.
pub fn submit(session: &mut Session, text: &str) {
    assert!(session.set_command_buffer(text));
    session.submit().expect("prompt accepts input");
}

/// Output log contents in order.
pub fn contents(session: &Session) -> Vec<String> {
    session
        .state()
        .output
        .iter()
        .map(|line| line.content.clone())
        .collect()
}

/// `npt` with its config directory pointed at `home`.
pub fn npt_command(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_npt"));
    cmd.env("NO_COLOR", "1")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("NPT_LOG");
    cmd
}
