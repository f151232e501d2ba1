//! Timeline engine: step counter, cursor blink, loading dots, rare message.

use rand::Rng;
use tracing::{debug, info};

use super::scheduler::{Millis, TaskKey};
use super::script::{RARE_MESSAGES, RARE_MESSAGE_CHANCE};
use super::state::{FINAL_STEP, RARE_MESSAGE_STEP};
use super::Session;

/// Interval between narrative steps.
pub const TICK_INTERVAL_MS: Millis = 1500;

/// Cursor blink interval.
pub const BLINK_INTERVAL_MS: Millis = 500;

/// Loading dots cycle interval.
pub const DOTS_INTERVAL_MS: Millis = 500;

impl<R: Rng> Session<R> {
    pub(super) fn arm_timeline(&mut self) {
        self.scheduler.schedule_every(TaskKey::Tick, TICK_INTERVAL_MS);
        self.scheduler
            .schedule_every(TaskKey::Blink, BLINK_INTERVAL_MS);
        self.scheduler.schedule_every(TaskKey::Dots, DOTS_INTERVAL_MS);
    }

    pub(super) fn on_tick(&mut self) {
        if self.state.step >= FINAL_STEP {
            self.scheduler.cancel(TaskKey::Tick);
            return;
        }

        self.state.step += 1;
        debug!(step = self.state.step, at = self.now(), "step");

        if self.state.step == RARE_MESSAGE_STEP && !self.state.rare_rolled {
            self.state.rare_rolled = true;
            self.state.rare_message = draw_rare_message(&mut self.rng);
            if let Some(message) = self.state.rare_message {
                info!(message, "rare message drawn");
            }
        }

        if self.state.step == FINAL_STEP {
            self.state.prompt_ready = true;
            self.scheduler.cancel(TaskKey::Tick);
            info!(at = self.now(), "prompt ready");
        }
    }

    pub(super) fn on_blink(&mut self) {
        let state = &mut self.state;
        if state.step < FINAL_STEP || state.prompt_ready {
            state.cursor_visible = !state.cursor_visible;
        } else {
            state.cursor_visible = false;
        }
    }

    pub(super) fn on_dots(&mut self) {
        self.state.loading_dots = next_dots(self.state.loading_dots);
    }
}

/// 0 -> 1 -> 2 -> 3 -> 0
fn next_dots(dots: u8) -> u8 {
    if dots >= 3 {
        0
    } else {
        dots + 1
    }
}

/// One Bernoulli trial; on success a uniformly chosen rare message.
fn draw_rare_message<R: Rng>(rng: &mut R) -> Option<&'static str> {
    if rng.random_bool(RARE_MESSAGE_CHANCE) {
        let idx = rng.random_range(0..RARE_MESSAGES.len());
        Some(RARE_MESSAGES[idx])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    /// Deterministic source returning the same word forever.
    struct ConstRng(u64);

    impl RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(self.0 as u8);
        }
    }

    fn started<R: Rng>(rng: R) -> Session<R> {
        let mut session = Session::with_rng(rng);
        session.start();
        session
    }

    #[test]
    fn step_increments_once_per_tick() {
        let mut session = started(ConstRng(u64::MAX));
        session.advance_to(TICK_INTERVAL_MS - 1);
        assert_eq!(session.state().step, 0);
        session.advance_to(TICK_INTERVAL_MS);
        assert_eq!(session.state().step, 1);
        session.advance_to(5 * TICK_INTERVAL_MS);
        assert_eq!(session.state().step, 5);
    }

    #[test]
    fn step_freezes_at_final_step() {
        let mut session = started(ConstRng(u64::MAX));
        session.advance_to(12 * TICK_INTERVAL_MS);
        assert_eq!(session.state().step, FINAL_STEP);
        assert!(!session.is_scheduled(TaskKey::Tick));

        session.advance_by(60_000);
        assert_eq!(session.state().step, FINAL_STEP);
    }

    #[test]
    fn prompt_ready_exactly_when_step_reaches_twelve() {
        let mut session = started(ConstRng(u64::MAX));
        session.advance_to(11 * TICK_INTERVAL_MS);
        assert!(!session.state().prompt_ready);
        session.advance_to(12 * TICK_INTERVAL_MS);
        assert!(session.state().prompt_ready);
    }

    #[test]
    fn rare_message_drawn_on_success() {
        // A zero word passes the 20% trial and picks index 0
        let mut session = started(ConstRng(0));
        session.advance_to(6 * TICK_INTERVAL_MS);
        assert!(session.state().rare_message.is_none());

        session.advance_to(7 * TICK_INTERVAL_MS);
        assert_eq!(session.state().rare_message, Some(RARE_MESSAGES[0]));
    }

    #[test]
    fn rare_message_skipped_on_failure() {
        let mut session = started(ConstRng(u64::MAX));
        session.advance_to(12 * TICK_INTERVAL_MS);
        assert!(session.state().rare_rolled);
        assert!(session.state().rare_message.is_none());
    }

    #[test]
    fn rare_message_not_rerolled_while_step_stays_seven() {
        let mut session = started(ConstRng(0));
        session.advance_to(7 * TICK_INTERVAL_MS);
        let first = session.state().rare_message;

        // Blink and dots keep firing while step is still 7
        session.rng = ConstRng(u64::MAX);
        session.advance_to(8 * TICK_INTERVAL_MS - 1);
        assert_eq!(session.state().step, 7);
        assert_eq!(session.state().rare_message, first);

        session.advance_to(12 * TICK_INTERVAL_MS);
        assert_eq!(session.state().rare_message, first);
    }

    #[test]
    fn cursor_toggles_every_blink() {
        let mut session = started(ConstRng(u64::MAX));
        assert!(session.state().cursor_visible);
        session.advance_to(BLINK_INTERVAL_MS);
        assert!(!session.state().cursor_visible);
        session.advance_to(2 * BLINK_INTERVAL_MS);
        assert!(session.state().cursor_visible);
    }

    #[test]
    fn cursor_forced_off_between_final_step_and_prompt() {
        let mut session = started(ConstRng(u64::MAX));
        session.state.step = FINAL_STEP;
        session.state.prompt_ready = false;
        session.state.cursor_visible = true;

        session.on_blink();
        assert!(!session.state().cursor_visible);
        session.on_blink();
        assert!(!session.state().cursor_visible);
    }

    #[test]
    fn cursor_keeps_blinking_after_prompt_ready() {
        let mut session = started(ConstRng(u64::MAX));
        session.advance_to(12 * TICK_INTERVAL_MS);
        let before = session.state().cursor_visible;
        session.advance_by(BLINK_INTERVAL_MS);
        assert_ne!(session.state().cursor_visible, before);
    }

    #[test]
    fn loading_dots_cycle() {
        let mut session = started(ConstRng(u64::MAX));
        let mut seen = Vec::new();
        for i in 1..=5 {
            session.advance_to(i * DOTS_INTERVAL_MS);
            seen.push(session.state().loading_dots_str());
        }
        assert_eq!(seen, vec![".", "..", "...", "", "."]);
    }

    #[test]
    fn loading_dots_keep_running_after_narrative() {
        let mut session = started(ConstRng(u64::MAX));
        session.advance_to(12 * TICK_INTERVAL_MS);
        assert!(session.is_scheduled(TaskKey::Dots));
        let before = session.state().loading_dots;
        session.advance_by(DOTS_INTERVAL_MS);
        assert_eq!(session.state().loading_dots, next_dots(before));
    }

    #[test]
    fn next_dots_wraps() {
        assert_eq!(next_dots(0), 1);
        assert_eq!(next_dots(3), 0);
    }

    #[test]
    fn same_seed_same_rare_message() {
        let run = |seed| {
            let mut session = Session::seeded(seed);
            session.start();
            session.advance_to(12 * TICK_INTERVAL_MS);
            session.state().rare_message
        };
        for seed in 0..20 {
            assert_eq!(run(seed), run(seed));
        }
    }
}
