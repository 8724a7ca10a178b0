//! Progress display for token compositing

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_TICK_MS};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static TOKEN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Tokens: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} ({{eta}})"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Token counter shared by all compositing workers
///
/// Hidden when progress output is disabled, so callers never need to branch.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a visible bar for `total` tokens
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(TOKEN_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        Self { bar }
    }

    /// Create a reporter that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Create a visible or hidden reporter depending on `show`
    pub fn with_visibility(total: usize, show: bool) -> Self {
        if show { Self::new(total) } else { Self::hidden() }
    }

    /// Record one finished token
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    /// Number of tokens recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar and leave a completion message
    pub fn finish(&self) {
        self.bar.finish_with_message("All tokens composited");
    }
}
