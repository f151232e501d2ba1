//! Interactive terminal application
//!
//! Owns the terminal and one `Session`. Every frame the session clock is
//! moved to the scaled wall-clock time, the frame is drawn, and at most one
//! input event is applied. The session is torn down on every exit path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::Event;
use tracing::{info, warn};

use super::app::App;
use super::input::{handle_key_event, InputResult};
use super::theme::Theme;
use super::ui::{render_frame, FrameView};
use super::widgets::SnowField;
use crate::portal;
use crate::session::{Millis, Session};

/// Frame interval; also the longest wait for input.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Presentation settings for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Session clock multiplier
    pub speed: f64,
    pub ascii_only: bool,
    pub theme: Theme,
    pub snowflakes: usize,
    /// Seed for the snow field layout
    pub snow_seed: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            speed: 1.0,
            ascii_only: false,
            theme: Theme::default(),
            snowflakes: 50,
            snow_seed: 0,
        }
    }
}

/// Maps wall-clock time onto session time.
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    started: Instant,
    speed: f64,
}

impl SessionClock {
    pub fn new(started: Instant, speed: f64) -> Self {
        Self { started, speed }
    }

    /// Session time at wall-clock instant `now`.
    pub fn at(&self, now: Instant) -> Millis {
        scaled_ms(now.saturating_duration_since(self.started), self.speed)
    }
}

/// `elapsed` scaled by `speed`, in whole milliseconds.
pub fn scaled_ms(elapsed: Duration, speed: f64) -> Millis {
    (elapsed.as_secs_f64() * 1000.0 * speed).floor() as Millis
}

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Esc or Ctrl+C
    UserQuit,
    /// SIGTERM or SIGHUP
    Signal,
}

pub struct SantaApp {
    app: App,
    session: Session,
    options: RunOptions,
    snow: SnowField,
    shutdown: Arc<AtomicBool>,
}

impl SantaApp {
    /// Take over the terminal for `session`.
    pub fn new(session: Session, options: RunOptions) -> Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        register_shutdown_signals(&shutdown)?;

        let app = App::new(FRAME_INTERVAL)?;
        let snow = SnowField::new(options.snowflakes, options.snow_seed);
        Ok(Self {
            app,
            session,
            options,
            snow,
            shutdown,
        })
    }

    /// Run until the user quits or a termination signal arrives.
    pub fn run(&mut self) -> Result<ExitReason> {
        self.session.start();
        let clock = SessionClock::new(Instant::now(), self.options.speed);

        let result = self.event_loop(&clock);
        self.session.stop();
        result
    }

    fn event_loop(&mut self, clock: &SessionClock) -> Result<ExitReason> {
        loop {
            if self.shutdown.load(Ordering::Relaxed) {
                info!("termination signal received");
                return Ok(ExitReason::Signal);
            }

            self.session.advance_to(clock.at(Instant::now()));
            self.draw()?;

            if let Some(Event::Key(key)) = self.app.next_event()? {
                match handle_key_event(key, &mut self.session) {
                    InputResult::Quit => return Ok(ExitReason::UserQuit),
                    InputResult::OpenPortal => self.open_portal(),
                    InputResult::Submitted | InputResult::Continue => {}
                }
            }
        }
    }

    fn open_portal(&self) {
        if let Err(e) = portal::open(self.session.portal_url()) {
            warn!(error = %e, "could not open portal");
        }
    }

    fn draw(&mut self) -> Result<()> {
        let snap = self.session.snapshot();
        let view = FrameView {
            snap: &snap,
            theme: &self.options.theme,
            snow: &self.snow,
            ascii_only: self.options.ascii_only,
        };
        self.app.draw(|frame| render_frame(frame, &view))
    }
}

/// Raise `flag` on SIGTERM and SIGHUP so the loop can exit cleanly.
#[cfg(unix)]
fn register_shutdown_signals(flag: &Arc<AtomicBool>) -> Result<()> {
    use signal_hook::consts::signal::{SIGHUP, SIGTERM};

    for signal in [SIGTERM, SIGHUP] {
        signal_hook::flag::register(signal, Arc::clone(flag))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn register_shutdown_signals(_flag: &Arc<AtomicBool>) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_ms_applies_speed() {
        assert_eq!(scaled_ms(Duration::from_millis(1500), 1.0), 1500);
        assert_eq!(scaled_ms(Duration::from_millis(1500), 2.0), 3000);
        assert_eq!(scaled_ms(Duration::from_millis(1000), 0.5), 500);
    }

    #[test]
    fn clock_never_goes_negative() {
        let start = Instant::now();
        let clock = SessionClock::new(start + Duration::from_secs(5), 1.0);
        assert_eq!(clock.at(start), 0);
    }

    #[test]
    fn clock_measures_from_start() {
        let start = Instant::now();
        let clock = SessionClock::new(start, 4.0);
        assert_eq!(clock.at(start + Duration::from_millis(250)), 1000);
    }
}
