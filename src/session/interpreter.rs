//! Command interpreter: one branch per recognized command, plus the
//! fake package install that `npm install presents` kicks off.

use rand::Rng;
use tracing::{debug, info};

use super::command::Command;
use super::scheduler::{Millis, TaskKey};
use super::script;
use super::state::Overlay;
use super::Session;

/// Interval between install progress steps.
pub const INSTALL_INTERVAL_MS: Millis = 800;

/// Delay between `git blame santa` and the matrix overlay.
const MATRIX_DELAY_MS: Millis = 1000;

impl<R: Rng> Session<R> {
    pub(super) fn execute(&mut self, command: &Command, raw: &str) {
        match command {
            Command::ChristmasStart => {
                self.raise_overlay(Overlay::Snow);
                for line in script::CHRISTMAS_STARTED {
                    self.append(*line);
                }
            }
            Command::NpmInstallPresents => self.start_install(),
            Command::Whoami => {
                let suffix: u32 = self.rng.random_range(1000..10_000);
                let gifts: u32 = self.rng.random_range(0..10_000);
                self.append(script::username_line(suffix));
                self.append(script::WHOAMI_LOCATION);
                self.append(script::WHOAMI_COFFEE);
                self.append(script::gifts_line(gifts));
                self.append(script::WHOAMI_STATUS);
            }
            Command::Help => {
                self.state.help_shown = true;
                for line in script::HELP_LINES {
                    self.append(*line);
                }
            }
            Command::CoffeeRefill => {
                self.append(script::COFFEE_NOW);
                for (delay, line) in script::COFFEE_LATER {
                    self.append_later(*delay, *line);
                }
            }
            Command::VimWishlist => {
                self.append(script::VIM_NOW);
                for (delay, line) in script::VIM_LATER {
                    self.append_later(*delay, *line);
                }
            }
            Command::Clear => {
                self.state.output.clear();
            }
            Command::GitBlameSanta => {
                self.raise_overlay(Overlay::Glitch);
                self.scheduler
                    .schedule_once(TaskKey::MatrixOn, MATRIX_DELAY_MS);
            }
            Command::Unknown(_) => {
                self.append(script::not_found_line(raw));
                self.append(script::NOT_FOUND_HINT);
            }
        }
    }

    /// Begin (or restart) the install overlay from the first message.
    fn start_install(&mut self) {
        self.raise_overlay(Overlay::Install);
        self.state.install_progress = 0;
        self.scheduler
            .schedule_every(TaskKey::InstallTick, INSTALL_INTERVAL_MS);
        debug!(at = self.now(), "install started");
    }

    pub(super) fn on_install_tick(&mut self) {
        let last = script::INSTALL_MESSAGES.len() - 1;
        if !self.state.overlays.installing || self.state.install_progress >= last {
            self.scheduler.cancel(TaskKey::InstallTick);
            return;
        }

        self.state.install_progress += 1;

        if self.state.install_progress == last {
            self.lower_overlay(Overlay::Install);
            self.append(script::INSTALL_REJECTED);
            self.scheduler.cancel(TaskKey::InstallTick);
            info!(at = self.now(), "install rejected");
        }
    }
}
