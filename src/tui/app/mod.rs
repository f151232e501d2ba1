//! Terminal ownership for TUI applications
//!
//! `App` puts the terminal into raw mode on the alternate screen and
//! restores it when dropped, including on early returns and panics that
//! unwind through the event loop.

pub mod status_footer;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

/// Raw-mode terminal plus the event poll interval.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
}

impl App {
    /// Take over the terminal.
    ///
    /// # Arguments
    /// * `tick_rate` - Longest time `next_event` blocks waiting for input
    pub fn new(tick_rate: Duration) -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            tick_rate,
        })
    }

    /// Draw one frame.
    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Wait up to one tick for an input event.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if event::poll(self.tick_rate)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        );
    }
}
