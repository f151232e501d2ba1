//! Widgets for the terminal UI
//!
//! - `terminal_view`: narrative, hidden log, output log and prompt
//! - `overlays`: snowfall, install modal, matrix modal

pub mod overlays;
pub mod terminal_view;

pub use overlays::SnowField;
pub use terminal_view::TerminalView;
