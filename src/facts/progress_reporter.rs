//! Progress reporting for the fetch phase.

use core::time::Duration;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::IsTerminal;

/// A spinner shown on stderr while requests are outstanding.
///
/// The spinner only draws when enabled and stderr is a terminal, so redirected
/// output and tests never see control sequences.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        let bar = ProgressBar::hidden();
        if enabled && std::io::stderr().is_terminal() {
            bar.set_draw_target(ProgressDrawTarget::stderr_with_hz(10));
        }

        Self { bar }
    }

    /// A reporter that never draws anything.
    #[must_use]
    pub fn hidden() -> Self {
        Self::new(false)
    }

    /// Set the prefix label for the spinner (e.g., "Fetching").
    pub fn set_prefix(&self, prefix: &str) {
        self.bar.set_prefix(prefix.to_string());
    }

    /// Set a message to display next to the spinner.
    pub fn set_message(&self, msg: impl AsRef<str>) {
        self.bar.set_message(msg.as_ref().to_string());
    }

    /// Switch to spinner mode for requests of unknown duration.
    pub fn enable_indeterminate_mode(&self) {
        // Pad spinner to 25 chars to align with the prefix column
        let template = "{prefix:>12.bold.cyan} [{spinner}] {msg}";
        match ProgressStyle::default_spinner().template(template) {
            Ok(style) => self.bar.set_style(style.tick_strings(&[
                "===                      ",
                "   ===                   ",
                "      ===                ",
                "         ===             ",
                "            ===          ",
                "               ===       ",
                "                  ===    ",
                "                     === ",
                "                      ===",
                "                  ===    ",
                "             ===         ",
                "        ===              ",
                "    ===                  ",
                "===                      ",
            ])),
            Err(e) => log::debug!("invalid spinner template: {e}"),
        }

        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    /// Finish and clear the spinner.
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}

