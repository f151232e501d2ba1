//! End-to-end session scenarios on the public API

use std::collections::HashSet;

use npt::session::script::{self, VIM_LATER};
use npt::session::{Lifecycle, LineKind, TaskKey, TICK_INTERVAL_MS};
use npt::Session;

use crate::helpers::{contents, ready_session, submit, PROMPT_READY_AT};

#[test]
fn narrative_steps_once_per_tick_until_prompt() {
    let mut session = Session::seeded(3);
    session.start();

    for step in 1..=12u8 {
        session.advance_to(u64::from(step) * TICK_INTERVAL_MS - 1);
        assert_eq!(session.state().step, step - 1);
        assert!(!session.state().prompt_ready);

        session.advance_to(u64::from(step) * TICK_INTERVAL_MS);
        assert_eq!(session.state().step, step);
    }
    assert!(session.state().prompt_ready);
    assert_eq!(session.now(), PROMPT_READY_AT);
}

#[test]
fn commands_typed_during_narrative_are_dropped() {
    let mut session = Session::seeded(3);
    session.start();
    session.advance_to(PROMPT_READY_AT - 1);

    assert!(!session.set_command_buffer("whoami"));
    assert!(session.submit().is_none());

    session.advance_to(PROMPT_READY_AT);
    assert!(session.state().command_buffer.is_empty());
    assert!(session.state().output.is_empty());
}

#[test]
fn delayed_lines_interleave_with_later_commands() {
    let mut session = ready_session(8);
    let t0 = session.now();

    submit(&mut session, "vim wishlist.txt");
    session.advance_by(200);
    submit(&mut session, "whoami");
    session.advance_to(t0 + 2_000);

    let lines = contents(&session);
    assert_eq!(lines.len(), 2 + 6 + 3);
    assert_eq!(lines[0], "$ vim wishlist.txt");
    assert_eq!(lines[1], script::VIM_NOW);
    assert_eq!(lines[2], "$ whoami");
    assert!(lines[3].starts_with("🧝 Username: elf_"));
    assert_eq!(lines[7], script::WHOAMI_STATUS);
    assert_eq!(lines[8], VIM_LATER[0].1);
    assert_eq!(lines[9], VIM_LATER[1].1);
    assert_eq!(lines[10], VIM_LATER[2].1);
}

#[test]
fn uppercase_whoami_prints_five_lines_and_clears_buffer() {
    let mut session = ready_session(12);
    assert!(session.set_command_buffer("WHOAMI"));
    assert_eq!(session.submit(), Some(npt::Command::Whoami));

    let lines = contents(&session);
    assert_eq!(lines.len(), 1 + 5);
    assert_eq!(lines[0], "$ WHOAMI");
    assert!(lines[1].starts_with("🧝 Username: elf_"));
    assert_eq!(lines[5], script::WHOAMI_STATUS);
    assert_eq!(session.state().command_buffer, "");
}

#[test]
fn stop_mid_effect_drops_pending_lines() {
    let mut session = ready_session(8);
    submit(&mut session, "vim wishlist.txt");
    session.advance_by(700);
    assert_eq!(session.state().output.len(), 3);

    session.stop();
    assert_eq!(session.lifecycle(), Lifecycle::Stopped);
    assert!(session.next_deadline().is_none());

    session.advance_by(10_000);
    assert_eq!(session.state().output.len(), 3);
    assert!(!session.set_command_buffer("help"));
}

#[test]
fn overlays_run_independently() {
    let mut session = ready_session(2);
    let t0 = session.now();

    submit(&mut session, "/etc/init.d/christmas start");
    submit(&mut session, "git blame santa");
    submit(&mut session, "npm install presents");

    let overlays = session.state().overlays;
    assert!(overlays.snowing && overlays.glitching && overlays.installing);
    assert!(!overlays.matrix_active);

    session.advance_to(t0 + 1_000);
    assert!(session.state().overlays.matrix_active);

    session.advance_to(t0 + 3_000);
    let overlays = session.state().overlays;
    assert!(!overlays.glitching);
    assert!(overlays.snowing && overlays.matrix_active && overlays.installing);

    // Install finishes on its fifth 800ms step
    session.advance_to(t0 + 4_000);
    assert!(!session.state().overlays.installing);

    session.advance_to(t0 + 6_000);
    assert!(!session.state().overlays.matrix_active);
    assert!(session.state().overlays.snowing);

    session.advance_to(t0 + 10_000);
    assert!(!session.state().overlays.any());
}

#[test]
fn repeated_snow_does_not_extend_it() {
    let mut session = ready_session(2);
    let t0 = session.now();
    submit(&mut session, "/etc/init.d/christmas start");
    session.advance_to(t0 + 5_000);
    submit(&mut session, "/etc/init.d/christmas start");

    session.advance_to(t0 + 10_000);
    assert!(!session.state().overlays.snowing);
    assert!(!session.is_scheduled(TaskKey::OverlayClear(npt::session::Overlay::Snow)));
}

#[test]
fn line_ids_unique_and_times_ordered() {
    let mut session = ready_session(5);
    for cmd in ["help", "coffee --refill", "clear", "vim wishlist.txt", "nope", "whoami"] {
        submit(&mut session, cmd);
        session.advance_by(300);
    }
    session.advance_by(5_000);

    let output = &session.state().output;
    let ids: HashSet<_> = output.iter().map(|l| l.id).collect();
    assert_eq!(ids.len(), output.len());
    assert!(output.windows(2).all(|w| w[0].at <= w[1].at));
    assert!(output.windows(2).all(|w| w[0].id < w[1].id));
}

#[test]
fn every_submit_echoes_exactly_once() {
    let mut session = ready_session(5);
    let commands = ["help", "HELP", "  clear  ", "unknown thing", ""];
    for cmd in commands {
        submit(&mut session, cmd);
    }
    let echoes = session
        .state()
        .output
        .iter()
        .filter(|l| l.kind == LineKind::Input)
        .count();
    // Clear wipes everything before it, its own echo included
    assert_eq!(echoes, 2);
}

#[test]
fn same_seed_same_snapshot() {
    let run = |seed| {
        let mut session = ready_session(seed);
        submit(&mut session, "whoami");
        session.advance_by(1_000);
        serde_json::to_string(&session.snapshot()).unwrap()
    };
    assert_eq!(run(31), run(31));
}
