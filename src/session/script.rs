//! Static text tables: the narrative script, Easter-egg responses and overlay copy.
//!
//! Everything here is data. The timeline decides which reveal blocks are
//! visible, the interpreter decides which responses are appended.

/// Wishlist portal opened from the final reveal block.
pub const DEFAULT_PORTAL_URL: &str = "https://participant-v2.my-secret-santa.org/lettre_PN";

/// Window title.
pub const TITLE: &str = "North Pole Operations Terminal";

/// Marker echoed in front of submitted commands.
pub const PROMPT_MARKER: &str = "$ ";

/// Visual role of a narrative line; renderers map it to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Shell command typed by the operator
    Command,
    /// Default terminal green
    Plain,
    Success,
    /// Section banner (yellow)
    Banner,
    /// Progress arrow lines (blue)
    Info,
    /// White foreground
    Emphasis,
    /// Dimmed detail lines
    Detail,
    Alert,
    Notice,
    /// Exception dump
    Code,
    /// Portal call to action
    Link,
}

/// One line of a reveal block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptLine {
    pub text: &'static str,
    pub style: LineStyle,
    /// Left padding in columns
    pub indent: u16,
    /// Whether the animated loading dots follow the text
    pub dots: bool,
}

impl ScriptLine {
    const fn new(text: &'static str, style: LineStyle) -> Self {
        Self {
            text,
            style,
            indent: 0,
            dots: false,
        }
    }

    const fn indented(self, indent: u16) -> Self {
        Self { indent, ..self }
    }

    const fn with_dots(self) -> Self {
        Self { dots: true, ..self }
    }
}

/// A narrative segment shown once the step counter reaches `min_step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealBlock {
    pub min_step: u8,
    /// Blank line before the block
    pub spaced: bool,
    pub lines: &'static [ScriptLine],
}

use LineStyle::*;

/// The narrative, one block per step.
pub const REVEAL_BLOCKS: &[RevealBlock] = &[
    RevealBlock {
        min_step: 0,
        spaced: false,
        lines: &[ScriptLine::new(
            "$ ssh secret-santa@north-pole.christmas -p 2024",
            Command,
        )],
    },
    RevealBlock {
        min_step: 1,
        spaced: false,
        lines: &[ScriptLine::new("Password: ********", Plain)],
    },
    RevealBlock {
        min_step: 2,
        spaced: false,
        lines: &[ScriptLine::new(
            "Connection established. Encrypting channel using SANTAES-256...",
            Success,
        )],
    },
    RevealBlock {
        min_step: 3,
        spaced: true,
        lines: &[
            ScriptLine::new("🎅 SECRET SANTA TASK MANAGER v2.24.12 🎅", Banner),
            ScriptLine::new("=======================================", Banner),
        ],
    },
    RevealBlock {
        min_step: 4,
        spaced: false,
        lines: &[ScriptLine::new(
            "→ Initializing connection to Santa's Global Registry",
            Info,
        )
        .with_dots()],
    },
    RevealBlock {
        min_step: 5,
        spaced: false,
        lines: &[ScriptLine::new("→ Scanning European Division", Info).with_dots()],
    },
    RevealBlock {
        min_step: 6,
        spaced: false,
        lines: &[
            ScriptLine::new("→ Company identified:", Info),
            ScriptLine::new("Organization: Unlikely", Emphasis).indented(2),
            ScriptLine::new("Type: Digital Agency", Detail).indented(4),
            ScriptLine::new("Specialization: E-commerce & Digital Experiences", Detail)
                .indented(4),
            ScriptLine::new("41 rue de Paradis, 75010 Paris, France", Detail).indented(4),
            ScriptLine::new(
                "Notable Clients: Jean-Paul Gaultier, Jimmy Fairly, Eric Bompard, Martell",
                Detail,
            )
            .indented(4),
        ],
    },
    RevealBlock {
        min_step: 7,
        spaced: true,
        lines: &[
            ScriptLine::new("→ Scanning employee database...", Info),
            ScriptLine::new("Target located: @antoninlanglade", Emphasis),
        ],
    },
    RevealBlock {
        min_step: 8,
        spaced: true,
        lines: &[
            ScriptLine::new("Personnel File:", Emphasis),
            ScriptLine::new("GitHub: @antoninlanglade", Detail).indented(2),
            ScriptLine::new("Role: Chief Technical Officer (CTO)", Detail).indented(2),
            ScriptLine::new("Status: Active", Detail).indented(2),
            ScriptLine::new("Access Level: Administrator", Detail).indented(2),
            ScriptLine::new("Department: Technical Leadership", Detail).indented(2),
            ScriptLine::new(
                "Project Oversight: All Active E-commerce Implementations",
                Detail,
            )
            .indented(2),
        ],
    },
    RevealBlock {
        min_step: 9,
        spaced: true,
        lines: &[
            ScriptLine::new("[CRITICAL ALERT]", Alert),
            ScriptLine::new("Wishlist status verification initiated...", Plain),
            ScriptLine::new("Result: NO_WISHLIST_FOUND", Notice),
        ],
    },
    RevealBlock {
        min_step: 10,
        spaced: true,
        lines: &[
            ScriptLine::new("Exception Details:", Emphasis),
            ScriptLine::new("Error: WISHLIST_NOT_FOUND", Code).indented(2),
            ScriptLine::new("at SantaRegistry.checkWishlist(employees.js:1225)", Code)
                .indented(2),
            ScriptLine::new(
                "message: \"Unable to process gift allocation for @antoninlanglade\"",
                Code,
            )
            .indented(2),
        ],
    },
    RevealBlock {
        min_step: 11,
        spaced: true,
        lines: &[
            ScriptLine::new("SYSTEM RECOMMENDATION:", Banner),
            ScriptLine::new(
                "To ensure optimal gift matching and maintain Secret Santa protocol integrity,",
                Detail,
            )
            .indented(2),
            ScriptLine::new(
                "immediate wishlist submission is required through the secure portal.",
                Detail,
            )
            .indented(2),
        ],
    },
    RevealBlock {
        min_step: 12,
        spaced: true,
        lines: &[
            ScriptLine::new("URGENT ACTION REQUIRED:", Alert),
            ScriptLine::new(
                "Please proceed to the secure wishlist submission portal:",
                Plain,
            )
            .indented(2),
            ScriptLine::new("🎁 Access Wishlist Portal →", Link).indented(2),
        ],
    },
];

/// Reveal blocks visible at `step`.
pub fn visible_blocks(step: u8) -> impl Iterator<Item = &'static RevealBlock> {
    REVEAL_BLOCKS.iter().filter(move |b| step >= b.min_step)
}

/// Messages that may surface in the hidden log.
pub const RARE_MESSAGES: &[&str] = &[
    "Found suspicious amount of cat videos in browser history...",
    "Warning: Coffee consumption levels above recommended limits",
    "Detected: Multiple tabs of StackOverflow open simultaneously",
    "Alert: Unusual amount of time spent on GitHub at 3 AM",
    "Notice: High frequency of 'git push --force' detected",
    "Observation: Remarkable collection of mechanical keyboards identified",
    "Log: User frequently searches 'how to exit vim'",
    "Warning: Excessive use of dark mode detected",
    "Alert: Multiple instances of 'console.log' found in production",
];

/// Chance that a rare message is drawn.
pub const RARE_MESSAGE_CHANCE: f64 = 0.2;

pub fn hidden_log_line(message: &str) -> String {
    format!("[HIDDEN_LOG] {}", message)
}

/// Lines revealed one by one by the install overlay.
pub const INSTALL_MESSAGES: &[&str] = &[
    "🎄 found 2024 packages in 1.5s",
    "🎁 searching for gift dependencies...",
    "⚠️ package 'coal' is deprecated",
    "✨ preparing presents",
    "🔍 analyzing gift compatibility",
    "📦 packaging joy@3.2.1",
];

pub const INSTALL_REJECTED: &str = "ERR! 403 Forbidden: Packages can only be installed by Santa";

pub const CHRISTMAS_STARTED: &[&str] = &[
    "🎄 Christmas daemon started successfully",
    "✨ Initializing snow particles...",
    "🎅 Santa services running on port 2024",
];

pub fn username_line(suffix: u32) -> String {
    format!("🧝 Username: elf_{}", suffix)
}

pub const WHOAMI_LOCATION: &str = "📍 Location: Secret Workshop, North Pole";
pub const WHOAMI_COFFEE: &str = "☕ Coffee Level: CRITICAL - Refill needed";

pub fn gifts_line(count: u32) -> String {
    format!("🎁 Gifts Packed: {}", count)
}

pub const WHOAMI_STATUS: &str = "📊 Status: Slightly behind schedule (as always)";

pub const HELP_LINES: &[&str] = &[
    "\n=== North Pole Terminal v2.24.12 ===",
    "Available commands:",
    "  whoami           - Display elf identifier",
    "  coffee --refill  - Request coffee refill",
    "  vim wishlist.txt - Edit wishlist (not recommended)",
    "  clear           - Clear terminal output",
    "\nFor more information, contact your local elf administrator",
];

pub const COFFEE_NOW: &str = "☕ Initializing coffee maker...";

/// Follow-up lines for `coffee --refill`, with their delay in ms.
pub const COFFEE_LATER: &[(u64, &str)] = &[
    (
        500,
        "⚠️ ERROR: Coffee maker is in North Pole. User is too far away.",
    ),
    (
        1000,
        "💡 Suggestion: Try asking your Secret Santa for a coffee machine!",
    ),
];

pub const VIM_NOW: &str = "Opening vim...";

/// Follow-up lines for `vim wishlist.txt`, with their delay in ms.
pub const VIM_LATER: &[(u64, &str)] = &[
    (500, "⚠️ WARNING: No one knows how to exit vim."),
    (1000, "❌ Operation cancelled for your own safety."),
    (1500, "💡 Suggestion: Use the Secret Santa portal instead!"),
];

pub fn not_found_line(raw: &str) -> String {
    format!("Command not found: {}", raw)
}

pub const NOT_FOUND_HINT: &str = "Type 'help' for available commands";

pub const MATRIX_TITLE: &str = "ACCESS DENIED: SANTA IS BEYOND GIT'S JURISDICTION";
pub const MATRIX_SUBTITLE: &str = "Nice try, @antoninlanglade...";

pub const SECURITY_NOTICE_TITLE: &str = "Security Notice";
pub const SECURITY_NOTICE: &str = "This terminal session is monitored by North Pole Security Division. Any attempt to identify the Secret Santa agent will result in immediate placement on the naughty list and revocation of hot chocolate privileges.";

pub const PROMPT_PLACEHOLDER: &str = "Type your command...";

/// Render the visible narrative as plain text lines.
///
/// Used by headless output; terminal renderers style the blocks themselves.
pub fn plain_narrative(step: u8, dots: &str, portal_url: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for block in visible_blocks(step) {
        if block.spaced {
            lines.push(String::new());
        }
        for line in block.lines {
            let mut text = " ".repeat(line.indent as usize);
            text.push_str(line.text);
            if line.dots {
                text.push_str(dots);
            }
            if line.style == LineStyle::Link {
                text.push(' ');
                text.push_str(portal_url);
            }
            lines.push(text);
        }
    }
    lines
}
