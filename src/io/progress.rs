//! Progress display for long-running generations
//!
//! The walkers report through a plain callback; this manager turns those
//! reports into an indicatif bar, but only once the total work is large
//! enough to justify one. Short generations finish silently.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static GENERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Lazily created progress bar for one generation at a time
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    threshold: u64,
}

impl ProgressManager {
    /// Create a manager that stays silent below the work threshold
    pub const fn new(threshold: u64) -> Self {
        Self {
            bar: None,
            threshold,
        }
    }

    /// Report progress, creating the bar on first report past the threshold
    pub fn report(&mut self, label: &str, step: usize, total: usize) {
        if self.bar.is_none() && total as u64 > self.threshold {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(GENERATION_STYLE.clone());
            bar.set_message(label.to_string());
            self.bar = Some(bar);
        }
        if let Some(ref bar) = self.bar {
            bar.set_position(step as u64);
        }
    }

    /// Clear the bar after a generation finishes
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
