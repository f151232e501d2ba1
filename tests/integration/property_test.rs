//! Property tests for timeline and command invariants

use proptest::prelude::*;

use npt::session::command::normalize;
use npt::session::state::FINAL_STEP;
use npt::{Command, Session};

use crate::helpers::ready_session;

proptest! {
    #[test]
    fn step_is_monotonic_and_bounded(
        seed in any::<u64>(),
        deltas in prop::collection::vec(0u64..4_000, 1..40),
    ) {
        let mut session = Session::seeded(seed);
        session.start();
        let mut last = 0;
        for delta in deltas {
            session.advance_by(delta);
            let state = session.state();
            prop_assert!(state.step >= last);
            prop_assert!(state.step <= FINAL_STEP);
            prop_assert_eq!(state.prompt_ready, state.step == FINAL_STEP);
            last = state.step;
        }
    }

    #[test]
    fn rare_message_never_changes_once_drawn(seed in any::<u64>(), extra in 0u64..60_000) {
        let mut session = Session::seeded(seed);
        session.start();
        session.advance_to(7 * 1_500);
        let drawn = session.state().rare_message;
        session.advance_by(extra);
        prop_assert_eq!(session.state().rare_message, drawn);
    }

    #[test]
    fn recognition_is_exact_after_normalizing(raw in "[ a-zA-Z./-]{0,30}") {
        let command = Command::parse(&raw);
        let known_text = Command::KNOWN.iter().any(|c| c.text() == normalize(&raw));
        prop_assert_eq!(command.is_known(), known_text);
    }

    #[test]
    fn submit_always_echoes_raw_input(seed in 0u64..1_000, raw in "\\PC{0,24}") {
        let mut session = ready_session(seed);
        session.set_command_buffer(raw.clone());
        session.submit();
        let first = session.state().output.first();
        // `clear` wipes its own echo
        if Command::parse(&raw) != Command::Clear {
            prop_assert_eq!(first.map(|l| l.content.clone()), Some(format!("$ {}", raw)));
        }
        prop_assert!(session.state().command_buffer.is_empty());
    }
}
