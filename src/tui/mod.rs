//! TUI (Text User Interface) module for npt
//!
//! Terminal presentation of a `Session` using ratatui/crossterm.
//!
//! - `app`: raw-mode terminal ownership and the status footer
//! - `santa_app`: the event loop driving a session in wall-clock time
//! - `input`: key handling
//! - `ui`: frame layout and text helpers
//! - `widgets`: terminal body and overlays
//! - `theme`: colors

pub mod app;
pub mod input;
pub mod santa_app;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use santa_app::{ExitReason, RunOptions, SantaApp};
pub use theme::{current_theme, install_theme, Theme};
