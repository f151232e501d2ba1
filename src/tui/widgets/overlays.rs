//! Full-screen and modal effects drawn over the terminal body.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::session::script::{MATRIX_SUBTITLE, MATRIX_TITLE};
use crate::session::{Millis, Snapshot};
use crate::tui::theme::Theme;
use crate::tui::ui::{border_set, centered_rect, display};

/// One snowflake: where it falls and how fast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flake {
    /// Horizontal position as a fraction of the width, 0.0..1.0
    pub column: f64,
    /// Time to fall the full height
    pub fall_ms: Millis,
    /// Time before the flake first appears
    pub delay_ms: Millis,
}

/// A fixed set of flakes, animated by session time.
#[derive(Debug, Clone)]
pub struct SnowField {
    flakes: Vec<Flake>,
}

impl SnowField {
    /// `count` flakes with columns and speeds drawn from `seed`.
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let flakes = (0..count)
            .map(|_| Flake {
                column: rng.random_range(0.0..1.0),
                fall_ms: rng.random_range(5_000..10_000),
                delay_ms: rng.random_range(0..5_000),
            })
            .collect();
        Self { flakes }
    }

    pub fn flakes(&self) -> &[Flake] {
        &self.flakes
    }

    /// Cells occupied by flakes at `now`, relative to `area`.
    pub fn positions(&self, area: Rect, now: Millis) -> Vec<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return Vec::new();
        }
        self.flakes
            .iter()
            .filter(|flake| now >= flake.delay_ms)
            .map(|flake| {
                let phase = (now - flake.delay_ms) % flake.fall_ms;
                let row = phase * u64::from(area.height) / flake.fall_ms;
                let col = (flake.column * f64::from(area.width)) as u16;
                (
                    area.x + col.min(area.width - 1),
                    area.y + row as u16,
                )
            })
            .collect()
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect, now: Millis, glyph: &str, color: Color) {
        for (x, y) in self.positions(area, now) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(glyph).set_fg(color);
            }
        }
    }
}

/// Centered box listing the install messages revealed so far.
pub fn render_install_modal(
    frame: &mut Frame,
    area: Rect,
    snap: &Snapshot,
    theme: &Theme,
    ascii_only: bool,
) {
    let modal_width = 56.min(area.width.saturating_sub(4));
    let modal_height = (snap.install_lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(modal_width)) / 2;
    let y = area.y + (area.height.saturating_sub(modal_height)) / 2;
    let modal_area = Rect::new(x, y, modal_width, modal_height);

    frame.render_widget(Clear, modal_area);

    let lines: Vec<Line> = snap
        .install_lines
        .iter()
        .map(|msg| Line::styled(display(msg, ascii_only), theme.text_style()))
        .collect();
    let modal = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_set(border_set(ascii_only))
            .border_style(theme.accent_style())
            .title(" npm install presents "),
    );
    frame.render_widget(modal, modal_area);
}

/// Full-screen digital rain with the access-denied message on top.
pub fn render_matrix_modal(
    frame: &mut Frame,
    area: Rect,
    now: Millis,
    theme: &Theme,
    ascii_only: bool,
) {
    frame.render_widget(Clear, area);
    render_rain(frame.buffer_mut(), area, now);

    let box_area = centered_rect(70, 30, area);
    frame.render_widget(Clear, box_area);
    let text = vec![
        Line::default(),
        Line::styled(
            MATRIX_TITLE,
            theme.error_style().add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(MATRIX_SUBTITLE, Style::default().fg(Color::Green)),
    ];
    let modal = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border_set(ascii_only))
                .border_style(theme.error_style()),
        );
    frame.render_widget(modal, box_area);
}

/// Columns of 0/1 digits sliding down one row every 80 ms.
fn render_rain(buf: &mut Buffer, area: Rect, now: Millis) {
    let shift = now / 80;
    for x in area.left()..area.right() {
        let column = u64::from(x);
        // Every third column is dark
        if column % 3 == 1 {
            continue;
        }
        for y in area.top()..area.bottom() {
            let seed = column * 31 + (u64::from(y) + 1000 - shift % 1000);
            let glyph = if seed % 2 == 0 { "0" } else { "1" };
            let color = if seed % 7 == 0 {
                Color::LightGreen
            } else {
                Color::Green
            };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(glyph).set_fg(color);
            }
        }
    }
}
