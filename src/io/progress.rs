//! Progress display for the image generation loop

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_MESSAGE};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Tracks how many combinations have been rendered
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} [{{elapsed_precise}}]"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a progress manager with no bar shown yet
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Show a bar sized for `total` images
    pub fn initialize(&mut self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_message(PROGRESS_MESSAGE);
        self.bar = Some(bar);
    }

    /// Record one more saved image
    pub fn advance(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Number of images recorded so far
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Leave the completed bar on screen
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish();
        }
    }
}
