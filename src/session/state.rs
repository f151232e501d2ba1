//! Session state and shared types.
//!
//! `SessionState` holds everything the timeline and the interpreter mutate.
//! `Snapshot` is the read-only view handed to renderers.

use serde::Serialize;

use crate::session::scheduler::Millis;
use crate::session::script::{self, INSTALL_MESSAGES};

/// Final value of the narrative step counter.
pub const FINAL_STEP: u8 = 12;

/// Step at which the rare message is drawn.
pub const RARE_MESSAGE_STEP: u8 = 7;

/// Unique identity of an output line within a session.
pub type LineId = u64;

/// Whether a line echoes user input or is program output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Input,
    Output,
}

/// One line of the append-only output log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputLine {
    pub id: LineId,
    pub kind: LineKind,
    pub content: String,
    /// Session time the line was appended at
    pub at: Millis,
}

/// Visual effects that can be layered over the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    Snow,
    Install,
    Glitch,
    Matrix,
}

impl Overlay {
    /// How long the flag stays up before clearing itself, if it does.
    pub fn auto_clear_after(self) -> Option<Millis> {
        match self {
            Overlay::Snow => Some(10_000),
            Overlay::Glitch => Some(3_000),
            Overlay::Matrix => Some(5_000),
            Overlay::Install => None,
        }
    }
}

/// The four independent overlay flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OverlayState {
    pub snowing: bool,
    pub installing: bool,
    pub glitching: bool,
    pub matrix_active: bool,
}

impl OverlayState {
    pub fn get(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Snow => self.snowing,
            Overlay::Install => self.installing,
            Overlay::Glitch => self.glitching,
            Overlay::Matrix => self.matrix_active,
        }
    }

    /// Set a flag, returning its previous value.
    pub fn set(&mut self, overlay: Overlay, on: bool) -> bool {
        let slot = match overlay {
            Overlay::Snow => &mut self.snowing,
            Overlay::Install => &mut self.installing,
            Overlay::Glitch => &mut self.glitching,
            Overlay::Matrix => &mut self.matrix_active,
        };
        std::mem::replace(slot, on)
    }

    pub fn any(&self) -> bool {
        self.snowing || self.installing || self.glitching || self.matrix_active
    }
}

/// All mutable state owned by one session.
#[derive(Debug, Clone)]
pub struct SessionState {
    // === Timeline ===
    /// Narrative step, 0..=FINAL_STEP
    pub step: u8,
    /// Cursor blink phase
    pub cursor_visible: bool,
    /// Number of loading dots, 0..=3
    pub loading_dots: u8,
    /// Rare hidden-log message, drawn at most once
    pub rare_message: Option<&'static str>,
    /// Whether the rare-message trial already ran
    pub rare_rolled: bool,
    /// Whether the command prompt accepts input
    pub prompt_ready: bool,

    // === Interpreter ===
    /// In-progress command text
    pub command_buffer: String,
    /// Append-only output log
    pub output: Vec<OutputLine>,
    /// Set by `help`; cosmetic only
    pub help_shown: bool,

    // === Effects ===
    pub overlays: OverlayState,
    /// Install progress, 0..INSTALL_MESSAGES.len()
    pub install_progress: usize,

    next_line_id: LineId,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            step: 0,
            cursor_visible: true,
            loading_dots: 0,
            rare_message: None,
            rare_rolled: false,
            prompt_ready: false,

            command_buffer: String::new(),
            output: Vec::new(),
            help_shown: false,

            overlays: OverlayState::default(),
            install_progress: 0,

            next_line_id: 0,
        }
    }

    /// Append a line to the output log and return its id.
    pub fn push_line(&mut self, kind: LineKind, content: impl Into<String>, at: Millis) -> LineId {
        let id = self.next_line_id;
        self.next_line_id += 1;
        self.output.push(OutputLine {
            id,
            kind,
            content: content.into(),
            at,
        });
        id
    }

    /// Loading dots as a string of 0-3 `.` characters.
    pub fn loading_dots_str(&self) -> &'static str {
        &"..."[..self.loading_dots.min(3) as usize]
    }

    /// Install messages revealed so far (empty unless installing).
    pub fn install_lines(&self) -> &'static [&'static str] {
        if self.overlays.installing {
            let end = (self.install_progress + 1).min(INSTALL_MESSAGES.len());
            &INSTALL_MESSAGES[..end]
        } else {
            &[]
        }
    }
}

/// Read-only view of a session for a presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub now_ms: Millis,
    pub step: u8,
    pub cursor_visible: bool,
    pub loading_dots: &'static str,
    pub rare_message: Option<&'static str>,
    pub overlays: OverlayState,
    pub install_progress: usize,
    pub install_lines: Vec<&'static str>,
    pub output: Vec<OutputLine>,
    pub prompt_ready: bool,
    pub command_buffer: String,
    pub help_shown: bool,
    /// Wishlist portal link, present once the narrative is complete
    pub portal_url: Option<String>,
}

impl Snapshot {
    pub(crate) fn capture(state: &SessionState, now_ms: Millis, portal_url: &str) -> Self {
        Self {
            now_ms,
            step: state.step,
            cursor_visible: state.cursor_visible,
            loading_dots: state.loading_dots_str(),
            rare_message: state.rare_message,
            overlays: state.overlays,
            install_progress: state.install_progress,
            install_lines: state.install_lines().to_vec(),
            output: state.output.clone(),
            prompt_ready: state.prompt_ready,
            command_buffer: state.command_buffer.clone(),
            help_shown: state.help_shown,
            portal_url: (state.step >= FINAL_STEP).then(|| portal_url.to_string()),
        }
    }

    /// Whether the blinking cursor at the end of the narrative is drawn.
    pub fn narrative_cursor(&self) -> bool {
        self.step < FINAL_STEP && self.cursor_visible
    }

    /// Whether the blinking cursor after the prompt is drawn.
    pub fn prompt_cursor(&self) -> bool {
        self.prompt_ready && self.cursor_visible
    }

    /// Whether the hidden-log line is shown.
    pub fn hidden_log(&self) -> Option<String> {
        if self.step < RARE_MESSAGE_STEP {
            return None;
        }
        self.rare_message.map(script::hidden_log_line)
    }
}
