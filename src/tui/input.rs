//! Keyboard input handling for the terminal UI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;

use crate::session::state::FINAL_STEP;
use crate::session::Session;

/// Result of processing a key event.
///
/// Returned by `handle_key_event` to signal control flow decisions to the
/// main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Nothing for the loop to do
    Continue,
    /// A command line was submitted to the session
    Submitted,
    /// Open the wishlist portal
    OpenPortal,
    /// Leave the terminal
    Quit,
}

/// Apply one key press to the session.
pub fn handle_key_event<R: Rng>(key: KeyEvent, session: &mut Session<R>) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Portal ===
        KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if session.state().step >= FINAL_STEP {
                InputResult::OpenPortal
            } else {
                InputResult::Continue
            }
        }

        // Other control chords are not text
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Continue,

        // === Command line editing ===
        KeyCode::Char(c) => {
            let mut text = session.state().command_buffer.clone();
            text.push(c);
            session.set_command_buffer(text);
            InputResult::Continue
        }
        KeyCode::Backspace => {
            let mut text = session.state().command_buffer.clone();
            if text.pop().is_some() {
                session.set_command_buffer(text);
            }
            InputResult::Continue
        }
        KeyCode::Enter => match session.submit() {
            Some(_) => InputResult::Submitted,
            None => InputResult::Continue,
        },

        _ => InputResult::Continue,
    }
}
