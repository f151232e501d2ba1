//! Command recognition for the toy prompt.
//!
//! Input is trimmed and lower-cased, then compared for exact equality with
//! the known command strings. There is no argument parsing.

/// A submitted command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/etc/init.d/christmas start`
    ChristmasStart,
    /// `npm install presents`
    NpmInstallPresents,
    Whoami,
    Help,
    /// `coffee --refill`
    CoffeeRefill,
    /// `vim wishlist.txt`
    VimWishlist,
    Clear,
    /// `git blame santa`
    GitBlameSanta,
    /// Anything else; holds the raw, untrimmed input
    Unknown(String),
}

impl Command {
    /// Every recognized command, in help order.
    pub const KNOWN: [Command; 8] = [
        Command::Whoami,
        Command::CoffeeRefill,
        Command::VimWishlist,
        Command::Clear,
        Command::Help,
        Command::ChristmasStart,
        Command::NpmInstallPresents,
        Command::GitBlameSanta,
    ];

    /// Recognize a raw command line.
    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "/etc/init.d/christmas start" => Command::ChristmasStart,
            "npm install presents" => Command::NpmInstallPresents,
            "whoami" => Command::Whoami,
            "help" => Command::Help,
            "coffee --refill" => Command::CoffeeRefill,
            "vim wishlist.txt" => Command::VimWishlist,
            "clear" => Command::Clear,
            "git blame santa" => Command::GitBlameSanta,
            _ => Command::Unknown(raw.to_string()),
        }
    }

    /// The normalized text that selects this command.
    pub fn text(&self) -> &str {
        match self {
            Command::ChristmasStart => "/etc/init.d/christmas start",
            Command::NpmInstallPresents => "npm install presents",
            Command::Whoami => "whoami",
            Command::Help => "help",
            Command::CoffeeRefill => "coffee --refill",
            Command::VimWishlist => "vim wishlist.txt",
            Command::Clear => "clear",
            Command::GitBlameSanta => "git blame santa",
            Command::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Command::Unknown(_))
    }
}

/// Trim and lower-case a command line for matching.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
