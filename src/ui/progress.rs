//! Progress reporting

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown on stderr while config files are fetched
///
/// Hidden automatically when stderr is not a terminal.
pub struct FetchProgress {
    bar: ProgressBar,
}

impl FetchProgress {
    /// Create a new fetch spinner
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new_spinner())
    }

    /// A spinner that never draws
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }
        Self { bar }
    }

    /// Mark start of fetching from `source`
    pub fn start(&self, source: &str) {
        self.bar.enable_steady_tick(Duration::from_millis(120));
        self.bar.set_message(format!("Fetching from {source}..."));
    }

    /// Record one fetched entry
    pub fn fetched(&self, index: usize, total: usize, relative_path: &str) {
        self.bar
            .set_message(format!("[{index}/{total}] {relative_path}"));
    }

    /// Clear the spinner once all entries are fetched
    pub fn finish(&self, count: usize) {
        self.bar.finish_and_clear();
        tracing::info!(count, "fetched config files");
    }

    /// Clear the spinner after a failure
    pub fn abandon(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for FetchProgress {
    fn default() -> Self {
        Self::new()
    }
}
