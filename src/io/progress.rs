//! Progress display for block processing

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BLOCK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} blocks")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar sized to the total block count
///
/// Display only; the transform's output never depends on whether or how
/// progress is reported.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create an idle progress manager
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Begin displaying a bar for the given number of blocks
    pub fn start(&mut self, label: &str, total_blocks: u64) {
        let bar = ProgressBar::new(total_blocks);
        bar.set_style(BLOCK_STYLE.clone());
        bar.set_message(label.to_string());
        self.bar = Some(bar);
    }

    /// Report the running count of completed blocks
    pub fn advance(&self, completed: u64) {
        if let Some(ref bar) = self.bar {
            bar.set_position(completed);
        }
    }

    /// Complete and clear the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
