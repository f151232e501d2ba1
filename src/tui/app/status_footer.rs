//! Status footer rendering
//!
//! A one-line bar at the bottom of the terminal: session state on the left,
//! keybinding hints on the right.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::session::Snapshot;
use crate::tui::theme::Theme;

/// Key hints shown while the narrative is still playing.
pub const NARRATIVE_KEYS: &[(&str, &str)] = &[("Esc", "quit")];

/// Key hints shown once the prompt is live.
pub const PROMPT_KEYS: &[(&str, &str)] = &[
    ("Enter", "run"),
    ("Ctrl+O", "open portal"),
    ("Esc", "quit"),
];

/// Render the footer for the current frame.
pub fn render_footer(frame: &mut Frame, area: Rect, snap: &Snapshot, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(hints_width(snap))])
        .split(area);

    let status = Paragraph::new(status_text(snap)).style(theme.text_secondary_style());
    frame.render_widget(status, chunks[0]);

    let keys = if snap.prompt_ready {
        PROMPT_KEYS
    } else {
        NARRATIVE_KEYS
    };
    let hints = Paragraph::new(Line::from(build_footer_spans(keys, theme)))
        .alignment(Alignment::Right);
    frame.render_widget(hints, chunks[1]);
}

/// Left-hand status: connection phase and active effects.
pub fn status_text(snap: &Snapshot) -> String {
    let mut text = if snap.prompt_ready {
        "connected".to_string()
    } else {
        format!("connecting {}/12", snap.step)
    };
    let o = &snap.overlays;
    for (on, label) in [
        (o.snowing, "snow"),
        (o.installing, "npm"),
        (o.glitching, "glitch"),
        (o.matrix_active, "matrix"),
    ] {
        if on {
            text.push_str(" | ");
            text.push_str(label);
        }
    }
    text
}

fn hints_width(snap: &Snapshot) -> u16 {
    let keys = if snap.prompt_ready {
        PROMPT_KEYS
    } else {
        NARRATIVE_KEYS
    };
    let len: usize = keys
        .iter()
        .map(|(k, d)| k.len() + d.len() + 2)
        .sum::<usize>()
        + keys.len().saturating_sub(1) * 3;
    len as u16
}

/// Build styled spans for footer keybinding hints.
///
/// Keys use the accent color, descriptions the secondary text color, and
/// entries are separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ".to_string(), theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}
