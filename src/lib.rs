//! North Pole Terminal
//!
//! A scripted ssh session that reveals a Secret Santa target line by line,
//! followed by a toy command prompt with a handful of Easter eggs.
//!
//! The `session` module is the whole behavior on an abstract millisecond
//! clock; `tui` presents it in a real terminal and `replay` runs it
//! headless.

pub mod cli;
pub mod config;
pub mod logging;
pub mod portal;
pub mod replay;
pub mod session;
pub mod tui;

pub use config::Config;
pub use session::{Command, Session, Snapshot};
pub use tui::theme;
