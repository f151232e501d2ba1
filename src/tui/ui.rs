//! Frame layout and text helpers for the terminal UI

use std::rc::Rc;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::app::status_footer::render_footer;
use super::theme::Theme;
use super::widgets::overlays::{render_install_modal, render_matrix_modal, SnowField};
use super::widgets::TerminalView;
use crate::session::script::{SECURITY_NOTICE, SECURITY_NOTICE_TITLE, TITLE};
use crate::session::Snapshot;

/// Everything one frame needs.
pub struct FrameView<'a> {
    pub snap: &'a Snapshot,
    pub theme: &'a Theme,
    pub snow: &'a SnowField,
    pub ascii_only: bool,
}

/// Split the screen into header, terminal body, security notice and footer.
pub fn build_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(area)
}

/// Draw a full frame, overlays included.
pub fn render_frame(frame: &mut Frame, view: &FrameView) {
    let area = frame.area();
    let chunks = build_layout(area);
    let snap = view.snap;
    let theme = view.theme;

    render_header(frame, chunks[0], theme, view.ascii_only);
    frame.render_widget(TerminalView::new(snap, theme, view.ascii_only), chunks[1]);
    render_notice(frame, chunks[2], theme, view.ascii_only);
    render_footer(frame, chunks[3], snap, theme);

    if snap.overlays.snowing {
        let glyph = if view.ascii_only { "*" } else { "❄" };
        view.snow
            .render(frame.buffer_mut(), area, snap.now_ms, glyph, theme.emphasis);
    }
    if snap.overlays.installing {
        render_install_modal(frame, area, snap, theme, view.ascii_only);
    }
    if snap.overlays.matrix_active {
        render_matrix_modal(frame, area, snap.now_ms, theme, view.ascii_only);
    }
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme, ascii_only: bool) {
    let dot = display("●", ascii_only);
    let header = Line::from(vec![
        Span::styled(dot.clone(), theme.error_style()),
        Span::raw(" "),
        Span::styled(dot.clone(), theme.accent_style()),
        Span::raw(" "),
        Span::styled(dot, theme.text_style()),
        Span::raw("  "),
        Span::styled(TITLE, theme.accent_bold_style()),
    ]);
    frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), area);
}

fn render_notice(frame: &mut Frame, area: Rect, theme: &Theme, ascii_only: bool) {
    let notice = Paragraph::new(display(SECURITY_NOTICE, ascii_only))
        .style(theme.text_secondary_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border_set(ascii_only))
                .border_style(theme.error_style())
                .title(format!(" {} ", SECURITY_NOTICE_TITLE)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(notice, area);
}

/// Create a centered layout with the given constraints.
///
/// Returns the center area that can be used for content.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}

/// Box-drawing border characters with plain ASCII replacements.
const ASCII_BORDER: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// Border characters for blocks and modals.
pub fn border_set(ascii_only: bool) -> border::Set {
    if ascii_only {
        ASCII_BORDER
    } else {
        border::PLAIN
    }
}

/// Text as it should be drawn: transliterated to ASCII when requested.
pub fn display(text: &str, ascii_only: bool) -> String {
    if ascii_only {
        deunicode::deunicode(text)
    } else {
        text.to_string()
    }
}

/// Longest suffix of `text` that fits in `max_width` terminal columns.
pub fn fit_tail(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}
