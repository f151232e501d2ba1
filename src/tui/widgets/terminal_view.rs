//! The fake terminal body.
//!
//! Draws the revealed narrative, the hidden-log line, the output log and the
//! prompt as one bottom-anchored column, like a real terminal scrolling.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::session::script::{self, LineStyle, PROMPT_MARKER, PROMPT_PLACEHOLDER};
use crate::session::{LineKind, Millis, Snapshot};
use crate::tui::theme::Theme;
use crate::tui::ui::{display, fit_tail};

/// How long one glitch jitter frame lasts, in session time.
const GLITCH_FRAME_MS: Millis = 100;

pub struct TerminalView<'a> {
    snap: &'a Snapshot,
    theme: &'a Theme,
    ascii_only: bool,
}

impl<'a> TerminalView<'a> {
    pub fn new(snap: &'a Snapshot, theme: &'a Theme, ascii_only: bool) -> Self {
        Self {
            snap,
            theme,
            ascii_only,
        }
    }

    fn cursor(&self) -> Span<'static> {
        let glyph = if self.ascii_only { "_" } else { "█" };
        Span::styled(glyph, self.theme.text_style())
    }

    /// Visible reveal blocks, with dots, the portal link and the blinking cursor.
    pub fn narrative_lines(&self) -> Vec<Line<'static>> {
        let snap = self.snap;
        let theme = self.theme;
        let mut lines = Vec::new();

        for block in script::visible_blocks(snap.step) {
            if block.spaced {
                lines.push(Line::default());
            }
            for line in block.lines {
                let style = theme.line_style(line.style);
                let mut spans = Vec::with_capacity(4);
                if line.indent > 0 {
                    spans.push(Span::raw(" ".repeat(line.indent as usize)));
                }
                spans.push(Span::styled(display(line.text, self.ascii_only), style));
                if line.dots {
                    spans.push(Span::styled(snap.loading_dots, style));
                }
                if line.style == LineStyle::Link {
                    if let Some(url) = &snap.portal_url {
                        spans.push(Span::raw(" "));
                        spans.push(Span::styled(url.clone(), style));
                    }
                }
                lines.push(Line::from(spans));
            }
        }

        if snap.narrative_cursor() {
            if let Some(last) = lines.last_mut() {
                last.spans.push(self.cursor());
            }
        }
        lines
    }

    /// Output log lines; embedded newlines start new rows.
    pub fn output_lines(&self) -> Vec<Line<'static>> {
        let theme = self.theme;
        let mut lines = Vec::new();
        for entry in &self.snap.output {
            let style = match entry.kind {
                LineKind::Input => theme.text_style().add_modifier(Modifier::BOLD),
                LineKind::Output => theme.line_style(LineStyle::Emphasis),
            };
            for row in entry.content.split('\n') {
                lines.push(Line::styled(display(row, self.ascii_only), style));
            }
        }
        lines
    }

    /// Prompt marker, buffer or placeholder, and cursor, trimmed to `width`.
    pub fn prompt_line(&self, width: u16) -> Line<'static> {
        let theme = self.theme;
        let snap = self.snap;
        let mut spans = vec![Span::styled(PROMPT_MARKER, theme.accent_bold_style())];

        let room = (width as usize)
            .saturating_sub(PROMPT_MARKER.width())
            .saturating_sub(1);
        if snap.command_buffer.is_empty() {
            spans.push(Span::styled(
                display(PROMPT_PLACEHOLDER, self.ascii_only),
                theme.text_secondary_style(),
            ));
        } else {
            let text = display(&snap.command_buffer, self.ascii_only);
            spans.push(Span::styled(
                fit_tail(&text, room).to_string(),
                theme.text_style(),
            ));
        }
        if snap.prompt_cursor() {
            spans.push(self.cursor());
        }
        Line::from(spans)
    }

    /// Horizontal jitter while the glitch overlay is up.
    fn glitch_offset(&self) -> u16 {
        if !self.snap.overlays.glitching {
            return 0;
        }
        match (self.snap.now_ms / GLITCH_FRAME_MS) % 4 {
            1 => 1,
            3 => 2,
            _ => 0,
        }
    }
}

impl Widget for TerminalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = self.narrative_lines();
        if let Some(hidden) = self.snap.hidden_log() {
            lines.push(Line::styled(
                display(&hidden, self.ascii_only),
                self.theme
                    .text_secondary_style()
                    .add_modifier(Modifier::ITALIC),
            ));
        }
        if self.snap.prompt_ready {
            lines.push(Line::default());
            lines.extend(self.output_lines());
            lines.push(self.prompt_line(area.width));
        }

        let offset = self.glitch_offset().min(area.width);
        let target = Rect {
            x: area.x + offset,
            width: area.width - offset,
            ..area
        };
        let scroll = bottom_scroll(lines.len(), target.height);
        Paragraph::new(lines)
            .scroll((scroll, 0))
            .render(target, buf);

        // Red tint on alternate glitch frames
        if self.snap.overlays.glitching && (self.snap.now_ms / GLITCH_FRAME_MS) % 2 == 0 {
            let tint = Style::default().fg(self.theme.error);
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_style(tint);
                    }
                }
            }
        }
    }
}

/// Row offset that keeps the last line at the bottom of a `height`-row area.
fn bottom_scroll(line_count: usize, height: u16) -> u16 {
    u16::try_from(line_count)
        .unwrap_or(u16::MAX)
        .saturating_sub(height)
}
