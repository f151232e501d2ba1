//! Headless session runs on a simulated clock
//!
//! `npt replay` plays the narrative to the prompt, submits a list of
//! commands and lets pending effects settle, all without a terminal. The
//! result is printed as plain text or as a JSON snapshot.

use serde::Serialize;
use tracing::debug;

use crate::session::script::{self, DEFAULT_PORTAL_URL};
use crate::session::state::FINAL_STEP;
use crate::session::{Millis, Session, Snapshot, TICK_INTERVAL_MS};

/// What to run.
#[derive(Debug, Clone)]
pub struct ReplayPlan {
    pub seed: u64,
    pub commands: Vec<String>,
    /// Simulated time between consecutive submits
    pub gap_ms: Millis,
    /// Simulated time after the last submit
    pub settle_ms: Millis,
    pub portal_url: String,
}

impl ReplayPlan {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            commands: Vec::new(),
            gap_ms: 250,
            settle_ms: 7000,
            portal_url: DEFAULT_PORTAL_URL.to_string(),
        }
    }

    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.commands.push(command.into());
        self
    }
}

/// Outcome of a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub seed: u64,
    pub snapshot: Snapshot,
}

impl ReplayReport {
    /// Narrative, hidden log and output log as plain lines.
    pub fn to_text(&self) -> String {
        let snap = &self.snapshot;
        let portal = snap.portal_url.as_deref().unwrap_or_default();
        let mut lines = script::plain_narrative(snap.step, snap.loading_dots, portal);
        if let Some(hidden) = snap.hidden_log() {
            lines.push(hidden);
        }
        if !snap.output.is_empty() {
            lines.push(String::new());
            lines.extend(snap.output.iter().map(|line| line.content.clone()));
        }
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Run a plan to completion and tear the session down.
pub fn run(plan: &ReplayPlan) -> ReplayReport {
    let mut session = Session::seeded(plan.seed).with_portal_url(plan.portal_url.clone());
    session.start();
    session.advance_to(Millis::from(FINAL_STEP) * TICK_INTERVAL_MS);

    for (i, command) in plan.commands.iter().enumerate() {
        if i > 0 {
            session.advance_by(plan.gap_ms);
        }
        session.set_command_buffer(command.as_str());
        if let Some(dispatched) = session.submit() {
            debug!(at = session.now(), command = dispatched.text(), "replay submit");
        }
    }
    session.advance_by(plan.settle_ms);

    let snapshot = session.snapshot();
    session.stop();
    ReplayReport {
        seed: plan.seed,
        snapshot,
    }
}
