//! Terminal session engine
//!
//! A session plays the scripted narrative and then runs the toy command
//! prompt. It is single-threaded and driven entirely by its caller:
//!
//! - `start()` arms the timeline timers at session time zero
//! - `advance_to()` / `advance_by()` move the session clock and fire due timers
//! - `set_command_buffer()` and `submit()` are the only inbound events
//! - `snapshot()` gives a renderer everything it needs for one frame
//! - `stop()` cancels every outstanding timer; nothing changes afterwards
//!
//! # Architecture
//!
//! - `scheduler`: named timer registry on an abstract millisecond clock
//! - `timeline`: step counter, cursor blink, loading dots, rare message
//! - `interpreter`: command dispatch and the effects it schedules
//! - `command`: command recognition
//! - `script`: static text tables
//! - `state`: `SessionState`, output lines, overlay flags, `Snapshot`
//!
//! # Usage
//!
//! ```
//! use npt::session::Session;
//!
//! let mut session = Session::seeded(7);
//! session.start();
//! session.advance_by(18_000);
//! assert!(session.state().prompt_ready);
//!
//! session.set_command_buffer("help");
//! session.submit();
//! assert!(session.state().help_shown);
//! ```

pub mod command;
mod interpreter;
pub mod scheduler;
pub mod script;
pub mod state;
mod timeline;

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

pub use command::Command;
pub use scheduler::{Millis, Scheduler, TaskKey};
pub use state::{LineId, LineKind, OutputLine, Overlay, OverlayState, SessionState, Snapshot};
pub use timeline::{BLINK_INTERVAL_MS, DOTS_INTERVAL_MS, TICK_INTERVAL_MS};
pub use interpreter::INSTALL_INTERVAL_MS;

/// Where a session is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, timers not armed yet
    Idle,
    Running,
    /// Torn down; all timers cancelled
    Stopped,
}

/// One lifetime of the terminal, from `start()` to `stop()`.
pub struct Session<R = StdRng> {
    state: SessionState,
    scheduler: Scheduler,
    rng: R,
    lifecycle: Lifecycle,
    portal_url: String,
    /// Payloads of pending `TaskKey::DelayedLine` timers
    delayed: HashMap<u64, &'static str>,
    next_delay_slot: u64,
}

impl Session<StdRng> {
    /// Session with a reproducible random source.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Session seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> Session<R> {
    /// Session drawing all randomness from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: SessionState::new(),
            scheduler: Scheduler::new(),
            rng,
            lifecycle: Lifecycle::Idle,
            portal_url: script::DEFAULT_PORTAL_URL.to_string(),
            delayed: HashMap::new(),
            next_delay_slot: 0,
        }
    }

    /// Override the wishlist portal link shown at the end of the narrative.
    pub fn with_portal_url(mut self, url: impl Into<String>) -> Self {
        self.portal_url = url.into();
        self
    }

    /// Arm the timeline. Returns false if the session was already started.
    pub fn start(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Idle {
            return false;
        }
        self.lifecycle = Lifecycle::Running;
        self.arm_timeline();
        info!(portal = %self.portal_url, "session started");
        true
    }

    /// Tear the session down, cancelling every outstanding timer.
    pub fn stop(&mut self) {
        if self.lifecycle == Lifecycle::Stopped {
            return;
        }
        let cancelled = self.scheduler.cancel_all();
        self.delayed.clear();
        self.lifecycle = Lifecycle::Stopped;
        info!(
            cancelled,
            at = self.scheduler.now(),
            step = self.state.step,
            "session stopped"
        );
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    /// Current session time in milliseconds.
    pub fn now(&self) -> Millis {
        self.scheduler.now()
    }

    /// When the next timer is due, if any.
    pub fn next_deadline(&self) -> Option<Millis> {
        if self.is_running() {
            self.scheduler.next_due()
        } else {
            None
        }
    }

    /// Whether a timer with this purpose is pending.
    pub fn is_scheduled(&self, key: TaskKey) -> bool {
        self.scheduler.is_scheduled(key)
    }

    /// Move the session clock to `target`, firing every timer due on the way
    /// in expiry order. Returns the number of timers fired.
    pub fn advance_to(&mut self, target: Millis) -> usize {
        if !self.is_running() {
            return 0;
        }
        let mut fired = 0;
        while let Some(key) = self.scheduler.pop_due(target) {
            self.fire(key);
            fired += 1;
        }
        self.scheduler.set_now(target);
        fired
    }

    /// Move the session clock forward by `delta` ms.
    pub fn advance_by(&mut self, delta: Millis) -> usize {
        self.advance_to(self.now() + delta)
    }

    /// Whether the prompt currently accepts text.
    pub fn accepts_input(&self) -> bool {
        self.is_running() && self.state.prompt_ready
    }

    /// Replace the in-progress command text. Ignored until the prompt is ready.
    pub fn set_command_buffer(&mut self, text: impl Into<String>) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.state.command_buffer = text.into();
        true
    }

    /// Submit the buffered command.
    ///
    /// Echoes the raw buffer, runs exactly one command branch and clears the
    /// buffer. Returns the dispatched command, or `None` if the prompt is not
    /// accepting input.
    pub fn submit(&mut self) -> Option<Command> {
        if !self.accepts_input() {
            return None;
        }
        let raw = std::mem::take(&mut self.state.command_buffer);
        let command = Command::parse(&raw);
        let now = self.now();
        self.state.push_line(
            LineKind::Input,
            format!("{}{}", script::PROMPT_MARKER, raw),
            now,
        );
        debug!(command = command.text(), known = command.is_known(), "dispatching command");
        self.execute(&command, &raw);
        Some(command)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn portal_url(&self) -> &str {
        &self.portal_url
    }

    /// Read-only view for a renderer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, self.now(), &self.portal_url)
    }

    fn fire(&mut self, key: TaskKey) {
        match key {
            TaskKey::Tick => self.on_tick(),
            TaskKey::Blink => self.on_blink(),
            TaskKey::Dots => self.on_dots(),
            TaskKey::InstallTick => self.on_install_tick(),
            TaskKey::OverlayClear(overlay) => self.lower_overlay(overlay),
            TaskKey::MatrixOn => self.raise_overlay(Overlay::Matrix),
            TaskKey::DelayedLine(slot) => {
                if let Some(text) = self.delayed.remove(&slot) {
                    self.append(text);
                }
            }
        }
    }

    /// Append an output line at the current session time.
    fn append(&mut self, content: impl Into<String>) {
        let now = self.now();
        self.state.push_line(LineKind::Output, content, now);
    }

    /// Append `text` after `delay` ms. Never cancelled except by `stop()`.
    fn append_later(&mut self, delay: Millis, text: &'static str) {
        let slot = self.next_delay_slot;
        self.next_delay_slot += 1;
        self.delayed.insert(slot, text);
        self.scheduler.schedule_once(TaskKey::DelayedLine(slot), delay);
    }

    /// Turn an overlay on. Arms its auto-clear timer on a false to true edge.
    fn raise_overlay(&mut self, overlay: Overlay) {
        let was_on = self.state.overlays.set(overlay, true);
        if was_on {
            return;
        }
        if let Some(after) = overlay.auto_clear_after() {
            self.scheduler
                .schedule_once(TaskKey::OverlayClear(overlay), after);
        }
        debug!(?overlay, at = self.now(), "overlay on");
    }

    /// Turn an overlay off; a no-op if it is already off.
    fn lower_overlay(&mut self, overlay: Overlay) {
        if self.state.overlays.set(overlay, false) {
            debug!(?overlay, at = self.now(), "overlay off");
        }
    }
}
