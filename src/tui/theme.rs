//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions.
//! Provides both ratatui styles (for TUI) and ANSI escape codes (for CLI).

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

use crate::session::script::LineStyle;

/// Theme configuration for the TUI.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Primary text color (narrative body, output log)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for banners, key hints and borders
    pub accent: Color,
    /// Progress arrows and info lines
    pub info: Color,
    /// Bright foreground for emphasized lines
    pub emphasis: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Background color (usually default/transparent)
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::terminal()
    }
}

impl Theme {
    /// Green phosphor terminal, the default look.
    pub fn terminal() -> Self {
        Self {
            text_primary: Color::Green,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            info: Color::LightBlue,
            emphasis: Color::White,
            error: Color::Red,
            success: Color::LightGreen,
            background: Color::Reset,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            info: Color::Blue,
            emphasis: Color::White,
            error: Color::Red,
            success: Color::Green,
            background: Color::Reset,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            info: Color::Blue,
            emphasis: Color::White,
            error: Color::Red,
            success: Color::Green,
            background: Color::Reset,
        }
    }

    /// Look up a theme by its config name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "terminal" => Some(Self::terminal()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    /// Names accepted by `by_name`.
    pub const NAMES: [&'static str; 3] = ["terminal", "classic", "ocean"];

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for a narrative line of the given role.
    pub fn line_style(&self, style: LineStyle) -> Style {
        let base = Style::default();
        match style {
            LineStyle::Command | LineStyle::Plain => base.fg(self.text_primary),
            LineStyle::Success => base.fg(self.success),
            LineStyle::Banner => base.fg(self.accent).add_modifier(Modifier::BOLD),
            LineStyle::Info => base.fg(self.info),
            LineStyle::Emphasis => base.fg(self.emphasis),
            LineStyle::Detail => base.fg(self.text_secondary),
            LineStyle::Alert => base.fg(self.error).add_modifier(Modifier::BOLD),
            LineStyle::Notice => base.fg(self.accent),
            LineStyle::Code => base.fg(self.error),
            LineStyle::Link => base
                .fg(self.emphasis)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        }
    }

    // ANSI color helpers for CLI output

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.success), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // RGB and indexed colors fall back to no color
        _ => "",
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Select the process-wide theme. Only the first call has an effect.
pub fn install_theme(theme: Theme) -> bool {
    THEME.set(theme).is_ok()
}

/// The installed theme, or the default when none was installed.
pub fn current_theme() -> Theme {
    THEME.get().cloned().unwrap_or_default()
}
